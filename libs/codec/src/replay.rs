//! Nonce replay protection
//!
//! Types whose descriptor sets `protects_against_replay` have their nonce
//! recorded on send and checked on receive. [`InMemoryReplayGuard`] keeps a
//! bounded window and evicts the oldest nonce once full; persistent stores
//! implement [`ReplayGuard`] themselves.

use crate::config::ReplayGuardSettings;
use csp_types::Nonce;
use parking_lot::Mutex;
use std::collections::{HashSet, VecDeque};

/// Store of nonces already seen
pub trait ReplayGuard: Send + Sync {
    fn contains(&self, nonce: &Nonce) -> bool;

    /// Record `nonce`; returns `false` if it was already present
    fn check_and_record(&self, nonce: &Nonce) -> bool;
}

/// Bounded in-memory nonce window
#[derive(Debug)]
pub struct InMemoryReplayGuard {
    inner: Mutex<NonceWindow>,
}

#[derive(Debug, Default)]
struct NonceWindow {
    seen: HashSet<Nonce>,
    order: VecDeque<Nonce>,
    capacity: usize,
}

impl InMemoryReplayGuard {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(NonceWindow {
                seen: HashSet::with_capacity(capacity.min(4096)),
                order: VecDeque::with_capacity(capacity.min(4096)),
                capacity: capacity.max(1),
            }),
        }
    }

    pub fn from_settings(settings: &ReplayGuardSettings) -> Self {
        Self::new(settings.capacity)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryReplayGuard {
    fn default() -> Self {
        Self::from_settings(&ReplayGuardSettings::default())
    }
}

impl ReplayGuard for InMemoryReplayGuard {
    fn contains(&self, nonce: &Nonce) -> bool {
        self.inner.lock().seen.contains(nonce)
    }

    fn check_and_record(&self, nonce: &Nonce) -> bool {
        let mut window = self.inner.lock();
        if !window.seen.insert(*nonce) {
            return false;
        }
        window.order.push_back(*nonce);
        while window.order.len() > window.capacity {
            if let Some(evicted) = window.order.pop_front() {
                window.seen.remove(&evicted);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nonce(byte: u8) -> Nonce {
        Nonce::new([byte; 24])
    }

    #[test]
    fn test_second_sighting_is_rejected() {
        let guard = InMemoryReplayGuard::new(8);
        assert!(guard.check_and_record(&nonce(1)));
        assert!(guard.contains(&nonce(1)));
        assert!(!guard.check_and_record(&nonce(1)));
        assert_eq!(guard.len(), 1);
    }

    #[test]
    fn test_oldest_nonce_is_evicted() {
        let guard = InMemoryReplayGuard::new(2);
        assert!(guard.check_and_record(&nonce(1)));
        assert!(guard.check_and_record(&nonce(2)));
        assert!(guard.check_and_record(&nonce(3)));

        assert!(!guard.contains(&nonce(1)));
        assert!(guard.contains(&nonce(2)));
        assert!(guard.contains(&nonce(3)));
        assert_eq!(guard.len(), 2);
    }

    #[test]
    fn test_zero_capacity_still_remembers_latest() {
        let guard = InMemoryReplayGuard::new(0);
        assert!(guard.check_and_record(&nonce(9)));
        assert!(!guard.check_and_record(&nonce(9)));
    }
}
