//! Input subsystem.
//!
//! Public API is platform-agnostic: the host translates its window-system
//! events into [`PointerEvent`]s and [`Key`]s before handing them to the
//! shell. The only cross-thread piece is [`TouchState`], written here on the
//! UI thread and sampled by the tick worker.

mod capture;
mod touch;
mod types;

pub use capture::apply_pointer;
pub use touch::TouchState;
pub use types::{Key, PointerEvent, PointerPhase};
