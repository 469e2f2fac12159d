//! In-Memory Store
//!
//! Map-backed implementation of `SpaceStore`. Used as the local backend
//! and throughout the tests. Document order is insertion order, matching
//! the display-order contract of the tree.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Community, DomainError, DomainResult, Space, Tree};

use super::traits::SpaceStore;

/// In-memory implementation of the space store
#[derive(Clone, Default)]
pub struct MemoryStore {
    spaces: Arc<Mutex<Vec<Space>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing tree (e.g. `Tree::seed()`)
    pub fn from_tree(tree: Tree) -> Self {
        Self {
            spaces: Arc::new(Mutex::new(tree.spaces().to_vec())),
        }
    }
}

#[async_trait]
impl SpaceStore for MemoryStore {
    async fn fetch_tree(&self) -> DomainResult<Tree> {
        let spaces = self.spaces.lock().await;
        Ok(Tree::new(spaces.clone()))
    }

    async fn create_space(&self, space: &Space) -> DomainResult<()> {
        let mut spaces = self.spaces.lock().await;
        // Document semantics: writing an existing id replaces the space
        // document but leaves its nested collection alone
        match spaces.iter_mut().find(|s| s.id == space.id) {
            Some(existing) => {
                existing.name = space.name.clone();
                existing.color = space.color.clone();
                existing.last_modified_by = space.last_modified_by.clone();
                existing.last_modified_at = space.last_modified_at;
            }
            None => spaces.push(Space {
                communities: Vec::new(),
                ..space.clone()
            }),
        }
        Ok(())
    }

    async fn update_space(&self, space: &Space) -> DomainResult<()> {
        let mut spaces = self.spaces.lock().await;
        let existing = spaces
            .iter_mut()
            .find(|s| s.id == space.id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space.id)))?;
        existing.name = space.name.clone();
        existing.color = space.color.clone();
        existing.last_modified_by = space.last_modified_by.clone();
        existing.last_modified_at = space.last_modified_at;
        Ok(())
    }

    async fn delete_space(&self, space_id: &str) -> DomainResult<()> {
        let mut spaces = self.spaces.lock().await;
        // Idempotent: deleting a missing document succeeds
        spaces.retain(|s| s.id != space_id);
        Ok(())
    }

    async fn create_community(&self, space_id: &str, community: &Community) -> DomainResult<()> {
        let mut spaces = self.spaces.lock().await;
        let space = spaces
            .iter_mut()
            .find(|s| s.id == space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;
        match space.communities.iter_mut().find(|c| c.id == community.id) {
            Some(existing) => *existing = community.clone(),
            None => space.communities.push(community.clone()),
        }
        Ok(())
    }

    async fn update_community(&self, space_id: &str, community: &Community) -> DomainResult<()> {
        let mut spaces = self.spaces.lock().await;
        let space = spaces
            .iter_mut()
            .find(|s| s.id == space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;
        let existing = space
            .communities
            .iter_mut()
            .find(|c| c.id == community.id)
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "Community {} not found under space {}",
                    community.id, space_id
                ))
            })?;
        *existing = community.clone();
        Ok(())
    }

    async fn delete_community(&self, space_id: &str, community_id: &str) -> DomainResult<()> {
        let mut spaces = self.spaces.lock().await;
        let space = spaces
            .iter_mut()
            .find(|s| s.id == space_id)
            .ok_or_else(|| DomainError::NotFound(format!("Space {} not found", space_id)))?;
        space.communities.retain(|c| c.id != community_id);
        Ok(())
    }
}
