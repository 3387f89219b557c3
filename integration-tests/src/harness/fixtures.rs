use kubewell_core::conf::{ConfigError, ValidatedConfig, load_config};
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Load and resolve a manifest from `fixtures/`.
pub fn load_fixture(file: &str) -> Result<ValidatedConfig, ConfigError> {
    load_config(&fixture_path(file))
}
