/// Keyboard key identifier.
///
/// Intentionally minimal: the keys the shell can bind to commands, plus an
/// escape hatch carrying a stable platform code. Hosts map their native
/// keycodes into these.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    R,
    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// Pointer event kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Anything else the platform reports (cancel, hover exit, ...).
    Cancel,
}

/// Pointer event in raw surface coordinates.
///
/// `surface_w`/`surface_h` are the input surface dimensions at event time.
/// Normalization happens at write time, against these dimensions, never at
/// sample time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub surface_w: f32,
    pub surface_h: f32,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32, surface_w: f32, surface_h: f32) -> Self {
        Self { phase, x, y, surface_w, surface_h }
    }
}
