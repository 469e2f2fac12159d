//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities carry a string document id and are thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's document id
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// All variants are non-fatal to the session; the caller may retry the
/// triggering action. A `Store` failure after an optimistic local update
/// leaves the local snapshot in place (no rollback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// Remote store call failed; local state may diverge until reload
    Store(String),
    /// Imported document could not be parsed; tree left unchanged
    Parse(String),
    /// Two-step move wrote the destination but failed to delete the source,
    /// leaving the community duplicated in the remote store
    PartialMove {
        community_id: String,
        from_space_id: String,
        to_space_id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Store(msg) => write!(f, "Store error: {}", msg),
            DomainError::Parse(msg) => write!(f, "Parse error: {}", msg),
            DomainError::PartialMove {
                community_id,
                from_space_id,
                to_space_id,
            } => write!(
                f,
                "Partial move: community {} written under {} but not removed from {}",
                community_id, to_space_id, from_space_id
            ),
        }
    }
}

impl std::error::Error for DomainError {}
