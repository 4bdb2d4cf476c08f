//! Paths to the shared fixture tree under `crates/testkit/fixtures`.

use std::path::{Path, PathBuf};

/// Root of the fixture tree.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Absolute path of a fixture, given its path relative to the fixture root.
pub fn fixture_path(relative: &str) -> PathBuf {
    fixtures_root().join(relative)
}

/// Directory holding the sample app tree used by discovery tests.
pub fn sample_apps_dir() -> PathBuf {
    fixture_path("apps")
}
