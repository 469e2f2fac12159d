//! Repository Layer - Store Trait
//!
//! Defines the abstract interface to the remote document store.
//! Implementations can be backed by a cloud document store, an in-memory
//! map, etc.

use async_trait::async_trait;

use crate::domain::{Community, DomainResult, Space, Tree};

/// Remote store boundary for the space/community hierarchy.
///
/// The store is a collection of space documents, each owning a nested
/// collection of community documents. Writes happen on exactly these two
/// levels; there are no cross-document transactions, so a move is a
/// destination write followed by a source delete and can fail in between.
///
/// All operations are async to support network backends.
#[async_trait]
pub trait SpaceStore: Send + Sync {
    /// Read the whole hierarchy in display order
    async fn fetch_tree(&self) -> DomainResult<Tree>;

    /// Create a space document (`name`, `color`, modification metadata).
    /// Communities are written separately through the nested collection.
    async fn create_space(&self, space: &Space) -> DomainResult<()>;

    /// Update a space document's own fields (not its communities)
    async fn update_space(&self, space: &Space) -> DomainResult<()>;

    /// Delete a space document. Nested community documents must already
    /// have been deleted by the caller; the store only touches the two
    /// collection levels it is asked for.
    async fn delete_space(&self, space_id: &str) -> DomainResult<()>;

    /// Write a community document under a space
    async fn create_community(&self, space_id: &str, community: &Community) -> DomainResult<()>;

    /// Update a community document under a space
    async fn update_community(&self, space_id: &str, community: &Community) -> DomainResult<()>;

    /// Delete a community document under a space
    async fn delete_community(&self, space_id: &str, community_id: &str) -> DomainResult<()>;
}
