//! Community Entity
//!
//! Leaf of the hierarchy. A community is owned by exactly one space at a
//! time; ownership transfers atomically during a move.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A community inside a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Document id, unique within the owning space
    pub id: String,
    /// Display name, never committed empty
    pub name: String,
    /// Email of the last actor to modify this community
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    /// Millisecond timestamp of the last modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<i64>,
}

impl Community {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_modified_by: None,
            last_modified_at: None,
        }
    }

    /// Record who touched this community and when
    pub(crate) fn stamp(&mut self, by: Option<&str>, at: i64) {
        self.last_modified_by = by.map(str::to_string);
        self.last_modified_at = Some(at);
    }
}

impl Entity for Community {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_creation() {
        let community = Community::new("1", "Comunicazioni HR");
        assert_eq!(community.id(), "1");
        assert_eq!(community.name, "Comunicazioni HR");
        assert!(community.last_modified_by.is_none());
        assert!(community.last_modified_at.is_none());
    }

    #[test]
    fn test_stamp_records_actor_and_time() {
        let mut community = Community::new("1", "Foo");
        community.stamp(Some("user@example.com"), 1_700_000_000_000);
        assert_eq!(community.last_modified_by.as_deref(), Some("user@example.com"));
        assert_eq!(community.last_modified_at, Some(1_700_000_000_000));
    }

    #[test]
    fn test_metadata_skipped_when_absent() {
        let community = Community::new("1", "Foo");
        let json = serde_json::to_string(&community).unwrap();
        assert!(!json.contains("lastModifiedBy"));
        assert!(!json.contains("lastModifiedAt"));
    }
}
