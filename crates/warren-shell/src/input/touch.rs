use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Last-known pointer position in normalized coordinates, plus an active
/// flag.
///
/// Single writer (the UI thread, via input capture), single reader (the tick
/// worker). Both halves of the position live in one 64-bit word so a reader
/// never observes a torn x/y pair. `active` is a separate flag: a reader
/// racing a press or release may act on a position up to one tick interval
/// stale. That bounded staleness is the contract — no lock, no blocking,
/// and all accesses are `Relaxed` because no cross-field ordering is
/// promised.
///
/// While `active` is false the stored position is stale and must not be
/// consumed; [`TouchState::sample`] enforces the gate.
#[derive(Debug, Default)]
pub struct TouchState {
    packed: AtomicU64,
    active: AtomicBool,
}

impl TouchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a normalized position.
    pub fn set_position(&self, x: f32, y: f32) {
        self.packed.store(pack(x, y), Ordering::Relaxed);
    }

    /// Marks the pointer active or inactive. The position is left untouched
    /// on release.
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Returns the current position while the pointer is active, `None`
    /// otherwise.
    pub fn sample(&self) -> Option<(f32, f32)> {
        if !self.is_active() {
            return None;
        }
        Some(unpack(self.packed.load(Ordering::Relaxed)))
    }
}

fn pack(x: f32, y: f32) -> u64 {
    (u64::from(x.to_bits()) << 32) | u64::from(y.to_bits())
}

fn unpack(bits: u64) -> (f32, f32) {
    (f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        let touch = TouchState::new();
        assert!(!touch.is_active());
        assert_eq!(touch.sample(), None);
    }

    #[test]
    fn sample_returns_stored_position_while_active() {
        let touch = TouchState::new();
        touch.set_position(0.25, 0.75);
        touch.set_active(true);
        assert_eq!(touch.sample(), Some((0.25, 0.75)));
    }

    #[test]
    fn release_gates_but_keeps_position() {
        let touch = TouchState::new();
        touch.set_position(0.5, 0.5);
        touch.set_active(true);
        touch.set_active(false);
        assert_eq!(touch.sample(), None);

        // Re-press re-exposes the old position until the next move.
        touch.set_active(true);
        assert_eq!(touch.sample(), Some((0.5, 0.5)));
    }

    #[test]
    fn pack_roundtrips_odd_values() {
        for (x, y) in [(0.0, 0.0), (-1.5, 2.25), (f32::MAX, f32::MIN_POSITIVE)] {
            assert_eq!(unpack(pack(x, y)), (x, y));
        }
    }
}
