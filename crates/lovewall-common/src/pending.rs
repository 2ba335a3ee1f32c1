//! Pending-action flags.
//!
//! A `PendingFlag` marks an action that is in flight (an AI request, a
//! recording). Acquiring it yields a `PendingGuard` that clears the flag on
//! drop, so the flag is released even when the owning task fails or is
//! aborted. The guard is `'static` and can move into a spawned task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct PendingFlag {
    inner: Arc<AtomicBool>,
}

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to mark the action as pending. Returns `None` if it already is.
    pub fn try_acquire(&self) -> Option<PendingGuard> {
        self.inner
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| PendingGuard {
                flag: Arc::clone(&self.inner),
            })
    }

    pub fn is_pending(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}

/// Clears the owning `PendingFlag` when dropped.
#[derive(Debug)]
pub struct PendingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_while_held() {
        let flag = PendingFlag::new();
        let guard = flag.try_acquire();
        assert!(guard.is_some());
        assert!(flag.is_pending());
        assert!(flag.try_acquire().is_none());
    }

    #[test]
    fn drop_releases_flag() {
        let flag = PendingFlag::new();
        {
            let _guard = flag.try_acquire().unwrap();
        }
        assert!(!flag.is_pending());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn clones_share_state() {
        let flag = PendingFlag::new();
        let other = flag.clone();
        let _guard = flag.try_acquire().unwrap();
        assert!(other.is_pending());
        assert!(other.try_acquire().is_none());
    }
}
