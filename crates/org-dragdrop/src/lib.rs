//! Drag Gesture State Machine
//!
//! Headless pick-up/drag/drop tracking for community reparenting.
//! The presentation layer reports gesture events; resolving a drop yields
//! a move request (or nothing, when the drop would be a no-op). Only one
//! gesture is tracked at a time.

use serde::{Deserialize, Serialize};

/// Current gesture state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        community_id: String,
        source_space_id: String,
    },
}

/// A drop resolved into a concrete reparent request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRequest {
    pub community_id: String,
    pub source_space_id: String,
    pub target_space_id: String,
}

/// Tracks a single drag gesture from pick-up to drop or cancel
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start dragging a community out of its space.
    ///
    /// A pick-up while already dragging overwrites the in-flight gesture
    /// (last pick-up wins).
    pub fn pick_up(&mut self, community_id: &str, source_space_id: &str) {
        self.state = DragState::Dragging {
            community_id: community_id.to_string(),
            source_space_id: source_space_id.to_string(),
        };
    }

    /// Resolve a drop onto a space and return to idle.
    ///
    /// Returns `None` when nothing was being dragged or the target is the
    /// source space (dropping a community back where it came from).
    pub fn drop_on(&mut self, target_space_id: &str) -> Option<DropRequest> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging {
                community_id,
                source_space_id,
            } => {
                if source_space_id == target_space_id {
                    return None;
                }
                Some(DropRequest {
                    community_id,
                    source_space_id,
                    target_space_id: target_space_id.to_string(),
                })
            }
        }
    }

    /// End the gesture without a drop (released outside any drop target).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_without_pickup_is_noop() {
        let mut gesture = DragGesture::new();
        assert_eq!(gesture.drop_on("commercial"), None);
        assert_eq!(*gesture.state(), DragState::Idle);
    }

    #[test]
    fn test_pickup_then_drop_resolves_request() {
        let mut gesture = DragGesture::new();
        gesture.pick_up("1", "admin");
        assert!(gesture.is_dragging());

        let request = gesture.drop_on("commercial").expect("drop should resolve");
        assert_eq!(request.community_id, "1");
        assert_eq!(request.source_space_id, "admin");
        assert_eq!(request.target_space_id, "commercial");
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_drop_on_source_space_is_noop() {
        let mut gesture = DragGesture::new();
        gesture.pick_up("1", "admin");
        assert_eq!(gesture.drop_on("admin"), None);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut gesture = DragGesture::new();
        gesture.pick_up("1", "admin");
        gesture.cancel();
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.drop_on("commercial"), None);
    }

    #[test]
    fn test_new_pickup_overwrites_inflight_gesture() {
        let mut gesture = DragGesture::new();
        gesture.pick_up("1", "admin");
        gesture.pick_up("7", "commercial");

        let request = gesture.drop_on("technical").expect("drop should resolve");
        assert_eq!(request.community_id, "7");
        assert_eq!(request.source_space_id, "commercial");
    }
}
