use anyhow::Context;
use image::RgbaImage;

use super::AssetSource;
use crate::engine::TextureSet;

/// Fixed texture names, in engine slot order.
pub const TEXTURE_NAMES: [&str; 3] = ["mud.png", "bricks.png", "grass.png"];

/// Opens and decodes the fixed texture set, best-effort.
///
/// A slot ends up `None` when its asset fails to open or decode; the
/// failure is logged and never propagated. Missing textures degrade the
/// demo visually, nothing else.
pub fn load_textures(source: &dyn AssetSource) -> TextureSet {
    TEXTURE_NAMES.map(|name| match decode(source, name) {
        Ok(img) => Some(img),
        Err(err) => {
            log::warn!("texture {name} unavailable: {err:#}");
            None
        }
    })
}

fn decode(source: &dyn AssetSource, name: &str) -> anyhow::Result<RgbaImage> {
    let bytes = source.open(name)?;
    let img =
        image::load_from_memory(&bytes).with_context(|| format!("failed to decode {name}"))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    struct MapAssets(HashMap<&'static str, Vec<u8>>);

    impl AssetSource for MapAssets {
        fn open(&self, name: &str) -> anyhow::Result<Vec<u8>> {
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no such asset: {name}"))
        }
    }

    fn png_1x1() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn all_slots_present_when_assets_decode() {
        let map: HashMap<_, _> = TEXTURE_NAMES.iter().map(|n| (*n, png_1x1())).collect();
        let set = load_textures(&MapAssets(map));
        assert!(set.iter().all(|t| t.is_some()));
    }

    #[test]
    fn missing_asset_leaves_slot_unset() {
        let map = HashMap::from([("mud.png", png_1x1())]);
        let set = load_textures(&MapAssets(map));
        assert!(set[0].is_some());
        assert!(set[1].is_none());
        assert!(set[2].is_none());
    }

    #[test]
    fn garbage_bytes_leave_slot_unset() {
        let map: HashMap<_, _> = TEXTURE_NAMES
            .iter()
            .map(|n| (*n, b"not a png".to_vec()))
            .collect();
        let set = load_textures(&MapAssets(map));
        assert!(set.iter().all(|t| t.is_none()));
    }
}
