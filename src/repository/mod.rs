//! Repository Layer
//!
//! Remote store abstraction and implementations.

mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use traits::SpaceStore;
