//! Rename Edit Buffer
//!
//! A single shared "currently edited name" buffer with an explicit
//! start/commit/cancel protocol. At most one target (a space or a
//! community) is in edit mode at a time; starting a new edit implicitly
//! cancels any other.

use serde::{Deserialize, Serialize};

/// What the shared edit buffer currently points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditTarget {
    Space {
        space_id: String,
    },
    Community {
        space_id: String,
        community_id: String,
    },
}

/// An in-progress rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEdit {
    target: EditTarget,
    buffer: String,
}

impl NameEdit {
    /// Seed the buffer with the target's current name
    pub fn start(target: EditTarget, current_name: &str) -> Self {
        Self {
            target,
            buffer: current_name.to_string(),
        }
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, value: &str) {
        self.buffer = value.to_string();
    }

    /// The name a commit would submit, or `None` when the buffer trims to
    /// empty (commit becomes a no-op that still exits edit mode)
    pub fn committed_name(&self) -> Option<&str> {
        let trimmed = self.buffer.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
