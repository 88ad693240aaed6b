pub mod inject;
pub mod loader;

pub use inject::inject_secrets;
pub use loader::{index_path, load_index};

use husk_core::{HuskResult, Secrets};
use std::path::Path;

/// Runs the whole load → inject sequence once. No caching: callers get the
/// bundle as it sits on disk at the time of the call.
pub fn prepare(bundle_dir: &Path, secrets: &Secrets) -> HuskResult<String> {
    let html = loader::load_index(bundle_dir)?;
    Ok(inject::inject_secrets(&html, secrets))
}
