//! Application lifecycle.
//!
//! The root state machine: owns the shared touch state and the
//! per-foreground-period tick worker, and forwards lifecycle transitions to
//! the engine.

mod shell;

pub use shell::{Phase, Shell, ShellConfig};
