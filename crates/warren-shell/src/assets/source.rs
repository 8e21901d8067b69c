use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read-only named-resource provider.
///
/// One source is created per shell lifecycle, handed to the engine at init,
/// and dropped with the shell. It must not be kept alive past teardown.
pub trait AssetSource: Send + Sync {
    /// Opens the named resource and returns its full contents.
    fn open(&self, name: &str) -> Result<Vec<u8>>;
}

/// Filesystem-backed asset source rooted at a single directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    /// Creates a source rooted at `root`. Fails fast when the directory is
    /// missing so a misconfigured install is caught at startup, not at the
    /// first texture load.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            anyhow::bail!("asset root {} is not a directory", root.display());
        }
        Ok(Self { root })
    }
}

impl AssetSource for DirAssets {
    fn open(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        fs::read(&path).with_context(|| format!("failed to read asset {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_is_an_error() {
        assert!(DirAssets::new("/definitely/not/a/real/dir").is_err());
    }

    #[test]
    fn open_reads_file_contents() {
        let dir = std::env::temp_dir().join("warren-assets-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("probe.bin"), b"abc").unwrap();

        let assets = DirAssets::new(&dir).unwrap();
        assert_eq!(assets.open("probe.bin").unwrap(), b"abc");
        assert!(assets.open("nope.bin").is_err());
    }
}
