use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out sequential event ids starting at 1. Ids are never reused.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}
impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
    pub fn next_id(&mut self) -> EventId {
        let id = EventId(self.next);
        self.next += 1;
        id
    }
}
impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_is_sequential_from_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), EventId(1));
        assert_eq!(ids.next_id(), EventId(2));
        assert_eq!(ids.next_id(), EventId(3));
    }

    #[test]
    fn allocators_are_independent() {
        let mut a = IdAllocator::default();
        let mut b = IdAllocator::default();
        a.next_id();
        assert_eq!(b.next_id(), EventId(1));
    }
}
