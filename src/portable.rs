//! Portable Document Boundary
//!
//! Converts the tree to and from the portable JSON structure used for
//! export/import, independent of the remote store. Spaces are written in
//! tree order with the derived glyph replaced by the bare id; on import
//! glyphs are recomputed, missing colors fall back to the fixed id lookup,
//! and a missing or malformed community list becomes an empty one.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{visual, Community, DomainError, DomainResult, Space, Tree};

/// File name suggested for a downloaded export
pub const DEFAULT_EXPORT_FILE_NAME: &str = "organization-structure.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableCommunity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortableSpace {
    pub id: String,
    /// On export this carries the bare space id in place of the derived
    /// glyph; it is ignored on import (glyphs are recomputed from `id`)
    #[serde(
        default,
        deserialize_with = "lenient_icon",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient_communities")]
    pub communities: Vec<PortableCommunity>,
}

/// Any non-string `icon` reads as absent; the field never feeds the
/// imported tree
fn lenient_icon<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// A missing or malformed `communities` field reads as an empty list
fn lenient_communities<'de, D>(deserializer: D) -> Result<Vec<PortableCommunity>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Build the portable representation of a tree, in display order
pub fn export(tree: &Tree) -> Vec<PortableSpace> {
    tree.spaces()
        .iter()
        .map(|space| PortableSpace {
            id: space.id.clone(),
            icon: Some(space.id.clone()),
            name: space.name.clone(),
            color: Some(space.color.clone()),
            communities: space
                .communities
                .iter()
                .map(|c| PortableCommunity {
                    id: c.id.clone(),
                    name: c.name.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Rebuild a tree from its portable representation
pub fn import(document: Vec<PortableSpace>) -> Tree {
    let spaces = document
        .into_iter()
        .map(|portable| {
            let color = portable
                .color
                .unwrap_or_else(|| visual::default_color_for(&portable.id).to_string());
            let mut space = Space::new(portable.id, portable.name, color);
            space.communities = portable
                .communities
                .into_iter()
                .map(|c| Community::new(c.id, c.name))
                .collect();
            space
        })
        .collect();
    Tree::new(spaces)
}

/// Serialize a tree as a pretty-printed portable document
pub fn to_json(tree: &Tree) -> DomainResult<String> {
    serde_json::to_string_pretty(&export(tree)).map_err(|e| DomainError::Parse(e.to_string()))
}

/// Parse a portable document into a tree. The caller's tree is untouched
/// on failure.
pub fn from_json(json: &str) -> DomainResult<Tree> {
    let document: Vec<PortableSpace> =
        serde_json::from_str(json).map_err(|e| DomainError::Parse(e.to_string()))?;
    Ok(import(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SpaceIcon;

    #[test]
    fn test_export_import_round_trip() {
        let tree = Tree::seed();
        let json = to_json(&tree).unwrap();
        let reloaded = from_json(&json).unwrap();
        assert_eq!(reloaded, tree);
    }

    #[test]
    fn test_export_replaces_glyph_with_bare_id() {
        let json = to_json(&Tree::seed()).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(raw[0]["icon"], "admin");
    }

    #[test]
    fn test_import_rederives_glyphs() {
        let json = r#"[{"id":"corporate","name":"Aziendale","color":"bg-red-100"}]"#;
        let tree = from_json(json).unwrap();
        assert_eq!(tree.spaces()[0].icon(), SpaceIcon::Globe);
    }

    #[test]
    fn test_missing_color_defaults_by_id() {
        let json = r#"[{"id":"technical","name":"Tecnico","communities":[]}]"#;
        let tree = from_json(json).unwrap();
        assert_eq!(tree.spaces()[0].color, "bg-yellow-100");
    }

    #[test]
    fn test_non_string_glyph_is_ignored() {
        let json = r#"[{"id":"admin","name":"HR","icon":{"ref":"Users"},"color":"bg-blue-100"}]"#;
        let tree = from_json(json).unwrap();
        assert_eq!(tree.spaces()[0].icon(), SpaceIcon::Users);
    }

    #[test]
    fn test_malformed_communities_default_to_empty() {
        let json = r#"[{"id":"admin","name":"HR","communities":"oops"}]"#;
        let tree = from_json(json).unwrap();
        assert!(tree.spaces()[0].communities.is_empty());
    }

    #[test]
    fn test_non_json_input_is_a_parse_error() {
        let err = from_json("definitely not json").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_import_preserves_display_order() {
        let json = r#"[
            {"id":"b","name":"Secondo","color":"bg-green-100","communities":[{"id":"2","name":"Y"},{"id":"1","name":"X"}]},
            {"id":"a","name":"Primo","color":"bg-blue-100"}
        ]"#;
        let tree = from_json(json).unwrap();
        let ids: Vec<&str> = tree.spaces().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        let community_ids: Vec<&str> = tree.spaces()[0]
            .communities
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(community_ids, vec!["2", "1"]);
    }
}
