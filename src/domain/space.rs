//! Space Entity
//!
//! Top-level named container. Owns an ordered list of communities;
//! insertion order is display order. The visual glyph is derived from the
//! id via `visual::SpaceIcon::for_id` and is never stored on the entity.

use serde::{Deserialize, Serialize};

use super::community::Community;
use super::entity::Entity;
use super::visual::SpaceIcon;

/// A top-level space with its communities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    /// Document id, globally unique and stable for the session
    pub id: String,
    pub name: String,
    /// Presentational category tag from the fixed palette
    pub color: String,
    /// Ordered communities; insertion order is display order
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<i64>,
}

impl Space {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            communities: Vec::new(),
            last_modified_by: None,
            last_modified_at: None,
        }
    }

    /// The glyph for this space, recomputed from its id
    pub fn icon(&self) -> SpaceIcon {
        SpaceIcon::for_id(&self.id)
    }

    pub fn find_community(&self, community_id: &str) -> Option<&Community> {
        self.communities.iter().find(|c| c.id == community_id)
    }

    pub(crate) fn find_community_mut(&mut self, community_id: &str) -> Option<&mut Community> {
        self.communities.iter_mut().find(|c| c.id == community_id)
    }

    /// Record who touched this space and when
    pub(crate) fn stamp(&mut self, by: Option<&str>, at: i64) {
        self.last_modified_by = by.map(str::to_string);
        self.last_modified_at = Some(at);
    }
}

impl Entity for Space {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_creation() {
        let space = Space::new("admin", "Amministrazione e HR", "bg-blue-100");
        assert_eq!(space.id(), "admin");
        assert_eq!(space.color, "bg-blue-100");
        assert!(space.communities.is_empty());
    }

    #[test]
    fn test_icon_derived_from_id() {
        let space = Space::new("technical", "Tecnico", "bg-yellow-100");
        assert_eq!(space.icon(), SpaceIcon::Laptop);
    }

    #[test]
    fn test_find_community() {
        let mut space = Space::new("admin", "Amministrazione e HR", "bg-blue-100");
        space.communities.push(Community::new("1", "Foo"));
        assert!(space.find_community("1").is_some());
        assert!(space.find_community("2").is_none());
    }

    #[test]
    fn test_communities_default_on_deserialize() {
        let space: Space =
            serde_json::from_str(r#"{"id":"admin","name":"HR","color":"bg-blue-100"}"#).unwrap();
        assert!(space.communities.is_empty());
    }
}
