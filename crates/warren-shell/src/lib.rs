//! Warren shell crate.
//!
//! This crate owns the presentation-and-input shell for an interactive 3D
//! demo: application lifecycle, touch/key capture, and the background tick
//! worker that paces the simulation. Rendering and physics live behind the
//! [`engine::Engine`] contract and are never reached around it.

pub mod assets;
pub mod command;
pub mod engine;
pub mod input;
pub mod lifecycle;
pub mod logging;
pub mod ticker;
