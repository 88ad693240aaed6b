use husk_core::{HuskError, HuskResult};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const INDEX_FILE: &str = "index.html";

pub fn index_path(bundle_dir: &Path) -> PathBuf {
    bundle_dir.join(INDEX_FILE)
}

/// Reads the bundle entry point as text. A missing file is the one condition
/// with a dedicated error; anything else surfaces as plain io.
pub fn load_index(bundle_dir: &Path) -> HuskResult<String> {
    let path = index_path(bundle_dir);
    if !path.exists() {
        return Err(HuskError::BundleMissing(path));
    }

    let html = std::fs::read_to_string(&path)?;
    debug!(path = %path.display(), bytes = html.len(), "bundle loaded");
    Ok(html)
}
