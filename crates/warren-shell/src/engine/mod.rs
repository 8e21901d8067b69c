//! Engine-facing contract.
//!
//! The shell drives an external rendering/simulation engine through this
//! interface and makes no assumptions about what sits behind it beyond the
//! call timing documented on each method.

mod contract;

pub use contract::{Engine, TextureSet};

#[cfg(test)]
pub(crate) mod recording;
