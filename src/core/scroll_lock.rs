//! Page scroll lock shared by all overlays
//!
//! The lock is held per overlay: the page stays locked while at least one
//! overlay holds it, so closing one of two open overlays does not unlock the
//! page underneath the other.

use std::collections::BTreeSet;

use super::overlay::OverlayKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: BTreeSet<OverlayKind>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for `holder`. Returns `true` if the page went from
    /// unlocked to locked. Acquiring twice for the same holder counts once.
    pub fn acquire(&mut self, holder: OverlayKind) -> bool {
        let was_locked = self.is_locked();
        if self.holders.insert(holder) {
            tracing::debug!(%holder, holders = self.holder_count(), "scroll lock acquired");
        }
        !was_locked && self.is_locked()
    }

    /// Drop `holder`'s share of the lock. Returns `true` if the page became
    /// scrollable again.
    pub fn release(&mut self, holder: OverlayKind) -> bool {
        let was_locked = self.is_locked();
        if self.holders.remove(&holder) {
            tracing::debug!(%holder, holders = self.holder_count(), "scroll lock released");
        }
        was_locked && !self.is_locked()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn is_held_by(&self, holder: OverlayKind) -> bool {
        self.holders.contains(&holder)
    }

    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    /// Value for `document.body.style.overflow`
    pub fn body_overflow(&self) -> &'static str {
        if self.is_locked() { "hidden" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder() {
        let mut lock = ScrollLock::new();
        assert!(!lock.is_locked());
        assert!(lock.acquire(OverlayKind::Search));
        assert!(lock.is_locked());
        assert_eq!(lock.body_overflow(), "hidden");
        assert!(lock.release(OverlayKind::Search));
        assert!(!lock.is_locked());
        assert_eq!(lock.body_overflow(), "");
    }

    #[test]
    fn test_overlapping_holders_keep_page_locked() {
        let mut lock = ScrollLock::new();
        lock.acquire(OverlayKind::Search);
        assert!(!lock.acquire(OverlayKind::ProductDetail));
        assert_eq!(lock.holder_count(), 2);

        assert!(!lock.release(OverlayKind::Search));
        assert!(lock.is_locked());
        assert!(lock.is_held_by(OverlayKind::ProductDetail));

        assert!(lock.release(OverlayKind::ProductDetail));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_double_acquire_counts_once() {
        let mut lock = ScrollLock::new();
        lock.acquire(OverlayKind::Cart);
        lock.acquire(OverlayKind::Cart);
        assert_eq!(lock.holder_count(), 1);
        assert!(lock.release(OverlayKind::Cart));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut lock = ScrollLock::new();
        assert!(!lock.release(OverlayKind::Cart));
        lock.acquire(OverlayKind::Search);
        assert!(!lock.release(OverlayKind::Cart));
        assert!(lock.is_locked());
    }
}
