//! Asset access.
//!
//! Provides the read-only named-resource source the shell hands to the
//! engine at init, plus best-effort decoding of the fixed texture set.

mod source;
mod textures;

pub use source::{AssetSource, DirAssets};
pub use textures::{TEXTURE_NAMES, load_textures};
