//! Visual Lookups
//!
//! Fixed id-keyed lookups for glyphs and colors. These are total functions
//! with an explicit fallback, pure and independent of the tree model.
//! Glyphs are never persisted; they are recomputed from ids on load.

use serde::{Deserialize, Serialize};

/// The fixed color palette for spaces
pub const COLOR_PALETTE: [&str; 5] = [
    "bg-blue-100",
    "bg-green-100",
    "bg-yellow-100",
    "bg-purple-100",
    "bg-red-100",
];

/// Glyph shown next to a space, derived from its id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceIcon {
    #[default]
    Users,
    Building,
    Laptop,
    Cog,
    Globe,
}

impl SpaceIcon {
    /// Glyph for a space id; unknown ids fall back to `Users`
    pub fn for_id(id: &str) -> Self {
        match id {
            "admin" => SpaceIcon::Users,
            "commercial" => SpaceIcon::Building,
            "technical" => SpaceIcon::Laptop,
            "operations" => SpaceIcon::Cog,
            "corporate" => SpaceIcon::Globe,
            _ => SpaceIcon::Users,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceIcon::Users => "users",
            SpaceIcon::Building => "building",
            SpaceIcon::Laptop => "laptop",
            SpaceIcon::Cog => "cog",
            SpaceIcon::Globe => "globe",
        }
    }
}

/// Default color for a space id when none is stored; unknown ids fall back
/// to the first palette entry
pub fn default_color_for(id: &str) -> &'static str {
    match id {
        "admin" => "bg-blue-100",
        "commercial" => "bg-green-100",
        "technical" => "bg-yellow-100",
        "operations" => "bg-purple-100",
        "corporate" => "bg-red-100",
        _ => COLOR_PALETTE[0],
    }
}

/// Pick a palette color from a numeric seed (e.g. a creation timestamp).
///
/// The pick does not need to be deterministic across sessions, but it must
/// always land inside the fixed palette.
pub fn palette_pick(seed: i64) -> &'static str {
    COLOR_PALETTE[(seed.unsigned_abs() as usize) % COLOR_PALETTE.len()]
}
