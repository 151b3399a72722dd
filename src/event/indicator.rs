//! Keyboard-indicator state: bitmask, lock keys, and the handoff cell.
//!
//! The host reports its lock-key indicators (caps/num/scroll) through a
//! platform callback that may run outside the main tick. That callback writes
//! a single atomic snapshot; the next tick reads it. No widget is ever touched
//! from the callback path.

use std::sync::atomic::{AtomicU8, Ordering};

use bitflags::bitflags;

bitflags! {
    /// The set of lit keyboard indicators reported by the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Indicators: u8 {
        /// No indicator lit.
        const NONE   = 0b000;
        /// Caps lock.
        const CAPS   = 0b001;
        /// Num lock.
        const NUM    = 0b010;
        /// Scroll lock.
        const SCROLL = 0b100;
    }
}

impl Default for Indicators {
    fn default() -> Self {
        Indicators::NONE
    }
}

impl Indicators {
    /// The indicators that changed between `self` and `other`, regardless of
    /// direction.
    #[inline]
    pub fn toggled_since(self, other: Indicators) -> Indicators {
        self ^ other
    }

    /// The lock keys whose indicators are currently lit.
    pub fn lit_keys(self) -> Vec<LockKey> {
        LockKey::ALL
            .iter()
            .copied()
            .filter(|key| self.contains(key.flag()))
            .collect()
    }
}

/// A host lock key, the input primitive of a keypad-less device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKey {
    Caps,
    Num,
    Scroll,
}

impl LockKey {
    /// All lock keys, in indicator-bit order.
    pub const ALL: [LockKey; 3] = [LockKey::Caps, LockKey::Num, LockKey::Scroll];

    /// The indicator bit this key controls.
    #[inline]
    pub const fn flag(self) -> Indicators {
        match self {
            LockKey::Caps => Indicators::CAPS,
            LockKey::Num => Indicators::NUM,
            LockKey::Scroll => Indicators::SCROLL,
        }
    }
}

// ---------------------------------------------------------------------------
// IndicatorCell
// ---------------------------------------------------------------------------

/// Single-writer/single-reader handoff cell for the latest indicator snapshot.
///
/// The platform callback calls [`publish`](IndicatorCell::publish); the state
/// machine calls [`snapshot`](IndicatorCell::snapshot) once per tick. Stores
/// only the latest value; intermediate states between ticks are intentionally
/// collapsed.
#[derive(Debug, Default)]
pub struct IndicatorCell {
    bits: AtomicU8,
}

impl IndicatorCell {
    /// Create a cell with no indicator lit.
    pub fn new() -> Self {
        Self { bits: AtomicU8::new(0) }
    }

    /// Overwrite the snapshot with the latest host state.
    pub fn publish(&self, state: Indicators) {
        self.bits.store(state.bits(), Ordering::Release);
    }

    /// Read the latest published state.
    pub fn snapshot(&self) -> Indicators {
        Indicators::from_bits_truncate(self.bits.load(Ordering::Acquire))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Indicators
    // -----------------------------------------------------------------------

    #[test]
    fn default_is_none() {
        assert_eq!(Indicators::default(), Indicators::NONE);
        assert!(Indicators::default().is_empty());
    }

    #[test]
    fn toggled_since_is_symmetric_difference() {
        let before = Indicators::CAPS | Indicators::NUM;
        let after = Indicators::NUM | Indicators::SCROLL;
        let toggled = after.toggled_since(before);
        assert_eq!(toggled, Indicators::CAPS | Indicators::SCROLL);
        assert_eq!(toggled, before.toggled_since(after));
    }

    #[test]
    fn toggled_since_self_is_empty() {
        let state = Indicators::CAPS | Indicators::SCROLL;
        assert!(state.toggled_since(state).is_empty());
    }

    #[test]
    fn lit_keys_lists_only_lit() {
        let state = Indicators::CAPS | Indicators::SCROLL;
        assert_eq!(state.lit_keys(), vec![LockKey::Caps, LockKey::Scroll]);
        assert!(Indicators::NONE.lit_keys().is_empty());
    }

    #[test]
    fn lock_key_flags_are_distinct() {
        let mut all = Indicators::NONE;
        for key in LockKey::ALL {
            assert!(!all.intersects(key.flag()));
            all |= key.flag();
        }
        assert_eq!(all, Indicators::CAPS | Indicators::NUM | Indicators::SCROLL);
    }

    // -----------------------------------------------------------------------
    // IndicatorCell
    // -----------------------------------------------------------------------

    #[test]
    fn new_cell_reads_empty() {
        let cell = IndicatorCell::new();
        assert_eq!(cell.snapshot(), Indicators::NONE);
    }

    #[test]
    fn publish_then_snapshot() {
        let cell = IndicatorCell::new();
        cell.publish(Indicators::NUM);
        assert_eq!(cell.snapshot(), Indicators::NUM);
    }

    #[test]
    fn publish_overwrites_previous() {
        let cell = IndicatorCell::new();
        cell.publish(Indicators::CAPS);
        cell.publish(Indicators::SCROLL);
        assert_eq!(cell.snapshot(), Indicators::SCROLL);
    }

    #[test]
    fn snapshot_does_not_consume() {
        let cell = IndicatorCell::new();
        cell.publish(Indicators::CAPS);
        assert_eq!(cell.snapshot(), Indicators::CAPS);
        assert_eq!(cell.snapshot(), Indicators::CAPS);
    }

    #[test]
    fn cell_ignores_unknown_bits() {
        let cell = IndicatorCell::new();
        cell.bits.store(0xFF, Ordering::Release);
        let snap = cell.snapshot();
        assert_eq!(snap, Indicators::CAPS | Indicators::NUM | Indicators::SCROLL);
    }
}
