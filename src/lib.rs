//! Org-Spaces Engine
//!
//! Layered architecture:
//! - domain: Core entities, session context, and visual lookups
//! - repository: Remote store abstraction and implementations
//! - engine: Mutation operations with optimistic local updates
//! - portable: Export/import document boundary
//!
//! The drag-gesture state machine lives in the `org-dragdrop` crate and is
//! re-exported here.

pub mod domain;
pub mod engine;
pub mod portable;
pub mod repository;

pub use domain::{
    Community, DomainError, DomainResult, Session, Space, SpaceIcon, Tree, UserIdentity,
};
pub use engine::{
    EditTarget, NameEdit, Persistence, StructureEngine, DEFAULT_COMMUNITY_NAME, DEFAULT_SPACE_NAME,
};
pub use org_dragdrop::{DragGesture, DragState, DropRequest};
pub use repository::{MemoryStore, SpaceStore};
