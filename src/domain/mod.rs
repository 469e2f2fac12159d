//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization
//! and chrono for timestamps).

mod community;
mod entity;
mod session;
mod space;
mod tree;
pub mod visual;

pub use community::Community;
pub use entity::{DomainError, DomainResult, Entity};
pub use session::{Session, UserIdentity};
pub use space::Space;
pub use tree::Tree;
pub use visual::SpaceIcon;
