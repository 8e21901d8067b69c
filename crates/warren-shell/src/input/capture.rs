use super::touch::TouchState;
use super::types::{PointerEvent, PointerPhase};

/// Applies a pointer event to the shared touch state.
///
/// Returns whether the event was consumed.
///
/// - Up only clears the active flag; the stored position goes stale but is
///   gated by the flag.
/// - Down marks the pointer active, then stores a position exactly like
///   Move does (a press also establishes an initial position).
/// - Move stores `x / surface_w, y / surface_h` regardless of the current
///   flag. Values are not clamped: raw coordinates outside the surface pass
///   through as normalized values outside `[0, 1]`.
/// - Cancel and friends change nothing and are reported unhandled.
///
/// Degenerate surface dimensions make the event unhandled rather than
/// storing non-finite values.
pub fn apply_pointer(touch: &TouchState, ev: &PointerEvent) -> bool {
    match ev.phase {
        PointerPhase::Up => {
            touch.set_active(false);
            true
        }
        PointerPhase::Down | PointerPhase::Move => {
            if !(ev.surface_w > 0.0 && ev.surface_h > 0.0) {
                return false;
            }
            if ev.phase == PointerPhase::Down {
                touch.set_active(true);
            }
            touch.set_position(ev.x / ev.surface_w, ev.y / ev.surface_h);
            true
        }
        PointerPhase::Cancel => false,
    }
}
