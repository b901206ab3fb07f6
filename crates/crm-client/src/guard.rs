//! Generation counter that lets a page drop the results of stale loads.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared load generation.
///
/// Every [`begin`](Self::begin) supersedes the tickets handed out before
/// it. [`invalidate`](Self::invalidate) supersedes all of them, e.g. when
/// the page goes away while a fetch is in flight.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    generation: Arc<AtomicU64>,
}

/// Proof that a load was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        LoadTicket { generation }
    }

    /// Whether no newer load has started since `ticket` was issued.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.generation
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_supersedes_older() {
        let guard = LoadGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_invalidate_drops_everything() {
        let guard = LoadGuard::new();
        let ticket = guard.clone().begin();
        guard.invalidate();
        assert!(!guard.is_current(ticket));
    }
}
