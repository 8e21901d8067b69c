//! Tick loop.
//!
//! One background worker per foreground period, pacing the engine at a
//! fixed interval and forwarding touch state between sleeps.

mod tick_loop;

pub use tick_loop::{TICK_INTERVAL, TickLoop};
