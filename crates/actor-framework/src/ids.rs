//! # Shared Id Generation
//!
//! Every [`ResourceActor`](crate::ResourceActor) draws ids from an [`IdGenerator`]. Actors
//! built with [`ResourceActor::new`](crate::ResourceActor::new) get a private counter; actors
//! built with [`ResourceActor::with_ids`](crate::ResourceActor::with_ids) can share one, so
//! ids stay unique across several resource types.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A monotonically increasing counter, cheap to clone and shared by reference.
///
/// Ids are never handed out twice, even if the entity they were drawn for is
/// rejected by its `on_create` hook.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Arc<AtomicU32>,
}

impl IdGenerator {
    /// Creates a counter whose first id is `first`. Ids are always positive.
    pub fn starting_at(first: NonZeroU32) -> Self {
        Self {
            next: Arc::new(AtomicU32::new(first.get())),
        }
    }

    /// Returns the current value, then increments it.
    pub fn generate(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// The id the next call to [`generate`](Self::generate) will return.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(NonZeroU32::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_counter() {
        let ids = IdGenerator::default();
        let other = ids.clone();

        assert_eq!(ids.generate(), 1);
        assert_eq!(other.generate(), 2);
        assert_eq!(ids.generate(), 3);
        assert_eq!(other.peek(), 4);
    }

    #[test]
    fn custom_start() {
        let ids = IdGenerator::starting_at(NonZeroU32::new(100).unwrap());
        assert_eq!(ids.generate(), 100);
        assert_eq!(ids.peek(), 101);
    }
}
