//! Fetch bookkeeping for screens.
//!
//! A screen owns one [`FetchTracker`] per data hook. Every fetch takes a
//! [`FetchTicket`]; when the result arrives it is applied only if the ticket
//! is still the newest one and the screen has not unmounted.

use crate::error::FetchError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// What a screen knows about one piece of remote data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(v) => FetchState::Ready(v),
            Err(e) => FetchState::Failed(e),
        }
    }
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Shared between a screen and its in-flight fetches.
#[derive(Debug, Clone)]
pub struct FetchTracker {
    generation: Arc<AtomicU64>,
    mounted: Arc<AtomicBool>,
}

impl Default for FetchTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchTracker {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Issue a ticket for a new fetch; older tickets become stale.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket { generation }
    }

    /// Whether a result for `ticket` may still be applied.
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        let current = self.generation.load(Ordering::SeqCst);
        let mounted = self.mounted.load(Ordering::SeqCst);
        if !mounted || ticket.generation != current {
            debug!(ticket = ticket.generation, current, mounted, "discarding fetch result");
            return false;
        }
        true
    }

    /// Called when the owning screen goes away.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Apply `result` to `state` if `ticket` is still accepted.
    pub fn settle<T>(
        &self,
        ticket: FetchTicket,
        state: &mut FetchState<T>,
        result: Result<T, FetchError>,
    ) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        *state = result.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let tracker = FetchTracker::new();
        let mut state: FetchState<u32> = FetchState::Pending;

        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.settle(first, &mut state, Ok(1)));
        assert!(state.is_pending());

        assert!(tracker.settle(second, &mut state, Ok(2)));
        assert_eq!(state.value(), Some(&2));
    }

    #[test]
    fn test_unmount_discards_results() {
        let tracker = FetchTracker::new();
        let ticket = tracker.begin();
        let task_handle = tracker.clone();

        tracker.unmount();

        let mut state: FetchState<u32> = FetchState::Pending;
        assert!(!task_handle.settle(ticket, &mut state, Ok(9)));
        assert_eq!(state, FetchState::Pending);
        assert!(!task_handle.is_mounted());
    }

    #[test]
    fn test_failure_is_exposed() {
        let tracker = FetchTracker::new();
        let ticket = tracker.begin();
        let mut state: FetchState<u32> = FetchState::Idle;
        tracker.settle(ticket, &mut state, Err(FetchError::Timeout));
        assert_eq!(state.error(), Some(&FetchError::Timeout));
        assert_eq!(state.value(), None);
    }
}
