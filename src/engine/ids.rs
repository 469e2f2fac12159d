//! Id Generation
//!
//! Fresh document ids derived from a millisecond timestamp, with a
//! monotonic guard so two creations in the same millisecond never collide.
//! Space ids are prefixed `space-`, community ids `new-`; the seed data
//! uses short numeric ids, which the prefixes can never shadow.

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic timestamp-based id source
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next millisecond value, strictly greater than any previously issued
    fn next_millis(&self) -> i64 {
        let now = chrono::Local::now().timestamp_millis();
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .map(|last| now.max(last + 1))
            .unwrap_or(now)
    }

    pub fn space_id(&self) -> String {
        format!("space-{}", self.next_millis())
    }

    pub fn community_id(&self) -> String {
        format!("new-{}", self.next_millis())
    }

    /// Millis value backing the most recent id, usable as a color seed
    pub fn last_issued(&self) -> i64 {
        self.last.load(Ordering::SeqCst)
    }
}
