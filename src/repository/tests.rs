//! Repository Integration Tests
//!
//! Tests for the in-memory SpaceStore implementation.

#[cfg(test)]
mod tests {
    use crate::domain::{Community, DomainError, Space, Tree};
    use crate::repository::{MemoryStore, SpaceStore};

    #[tokio::test]
    async fn test_fetch_empty_store() {
        let store = MemoryStore::new();
        let tree = store.fetch_tree().await.expect("fetch failed");
        assert!(tree.is_empty());
    }

    #[tokio::test]
    async fn test_create_spaces_preserves_order() {
        let store = MemoryStore::new();
        store
            .create_space(&Space::new("admin", "Amministrazione e HR", "bg-blue-100"))
            .await
            .unwrap();
        store
            .create_space(&Space::new("commercial", "Commerciale", "bg-green-100"))
            .await
            .unwrap();

        let tree = store.fetch_tree().await.unwrap();
        let ids: Vec<&str> = tree.spaces().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["admin", "commercial"]);
    }

    #[tokio::test]
    async fn test_create_space_does_not_write_communities() {
        let store = MemoryStore::new();
        let mut space = Space::new("admin", "Amministrazione e HR", "bg-blue-100");
        space.communities.push(Community::new("1", "Foo"));

        store.create_space(&space).await.unwrap();

        let tree = store.fetch_tree().await.unwrap();
        assert!(tree.find_space("admin").unwrap().communities.is_empty());
    }

    #[tokio::test]
    async fn test_update_space_requires_existing_document() {
        let store = MemoryStore::new();
        let space = Space::new("admin", "Amministrazione e HR", "bg-blue-100");
        let err = store.update_space(&space).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_space_fields() {
        let store = MemoryStore::from_tree(Tree::seed());
        let mut space = store
            .fetch_tree()
            .await
            .unwrap()
            .find_space("admin")
            .unwrap()
            .clone();
        space.name = "HR".to_string();
        space.last_modified_by = Some("user@example.com".to_string());
        space.last_modified_at = Some(1_700_000_000_000);

        store.update_space(&space).await.unwrap();

        let reloaded = store.fetch_tree().await.unwrap();
        let admin = reloaded.find_space("admin").unwrap();
        assert_eq!(admin.name, "HR");
        assert_eq!(admin.last_modified_by.as_deref(), Some("user@example.com"));
        // Nested collection untouched by a space-level update
        assert_eq!(admin.communities.len(), 5);
    }

    #[tokio::test]
    async fn test_delete_space_is_idempotent() {
        let store = MemoryStore::from_tree(Tree::seed());
        store.delete_space("corporate").await.unwrap();
        store.delete_space("corporate").await.unwrap();
        assert_eq!(store.fetch_tree().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_community_create_and_delete() {
        let store = MemoryStore::from_tree(Tree::seed());
        store
            .create_community("commercial", &Community::new("25", "Gare"))
            .await
            .unwrap();

        let tree = store.fetch_tree().await.unwrap();
        let commercial = tree.find_space("commercial").unwrap();
        assert_eq!(commercial.communities.last().unwrap().id, "25");

        store.delete_community("commercial", "25").await.unwrap();
        let tree = store.fetch_tree().await.unwrap();
        assert!(tree.find_community("commercial", "25").is_none());
    }

    #[tokio::test]
    async fn test_create_community_under_missing_space_fails() {
        let store = MemoryStore::new();
        let err = store
            .create_community("ghost", &Community::new("1", "Foo"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_community_name() {
        let store = MemoryStore::from_tree(Tree::seed());
        let mut community = Community::new("11", "Ricerca e sviluppo");
        community.last_modified_by = Some("user@example.com".to_string());

        store.update_community("technical", &community).await.unwrap();

        let tree = store.fetch_tree().await.unwrap();
        let updated = tree.find_community("technical", "11").unwrap();
        assert_eq!(updated.name, "Ricerca e sviluppo");
    }
}
