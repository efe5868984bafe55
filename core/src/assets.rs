use std::path::{Path, PathBuf};

use tracing::warn;

const REGION_DIR: &str = "regions";
const DEFAULT_MAP: &str = "default_map.png";
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// File stem used for a region's illustration: lower-case, with every run of
/// non-alphanumeric characters collapsed to `_`.
pub fn image_key(region: &str) -> String {
    let mut key = String::with_capacity(region.len());
    let mut pending_sep = false;

    for c in region.trim().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !key.is_empty() {
                key.push('_');
            }
            pending_sep = false;
            key.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    key
}

/// Region illustrations under `{assets}/regions/`, with a default map fallback.
#[derive(Clone, Debug)]
pub struct RegionImages {
    assets_dir: PathBuf,
}

impl RegionImages {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn default_image(&self) -> PathBuf {
        self.assets_dir.join(DEFAULT_MAP)
    }

    fn find_image(&self, region: &str) -> Option<PathBuf> {
        let key = image_key(region);
        if key.is_empty() {
            return None;
        }
        let dir = self.assets_dir.join(REGION_DIR);
        IMAGE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", key, ext)))
            .find(|path| path.is_file())
    }

    pub fn image_exists_for(&self, region: &str) -> bool {
        self.find_image(region).is_some()
    }

    /// The region's own image, or the default map when it has none.
    pub fn image_for(&self, region: &str) -> PathBuf {
        self.find_image(region).unwrap_or_else(|| {
            warn!(region, "no illustration for region, using default map");
            self.default_image()
        })
    }
}
