//! Sample status reports.
//!
//! The samples live in `crates/xjs-schema/tests/samples/` so the schema
//! crate's own tests read the same files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A 2.x status with containers, subordinates and a remote relation
pub const STATUS_2X: &str = "status_2x.yaml";
/// A 1.x status: `environment`, `services`, flat agent fields
pub const STATUS_1X: &str = "status_1x.yaml";
/// A JSON status of a k8s model
pub const STATUS_JSON: &str = "status.json";

pub fn samples_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../xjs-schema/tests/samples")
}

pub fn sample_path(name: &str) -> PathBuf {
    samples_dir().join(name)
}

/// Copy a sample into `dir` under `dest_name`, returning the new path
pub fn copy_sample(name: &str, dir: &Path, dest_name: &str) -> Result<PathBuf> {
    let dest = dir.join(dest_name);
    fs::copy(sample_path(name), &dest)
        .with_context(|| format!("failed to copy sample {}", name))?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_exist() {
        for name in [STATUS_2X, STATUS_1X, STATUS_JSON] {
            assert!(sample_path(name).is_file(), "missing sample {}", name);
        }
    }
}
