use crate::conf::error::ConfigError;
use crate::conf::types::{IngressControllerManifest, IngressControllerSpec};
use serde::de::IgnoredAny;
use std::collections::BTreeMap;
use std::path::Path;

const INLINE_SOURCE: &str = "<inline>";

/// Just enough of a document to tell a full custom resource from a bare spec.
type TopLevelKeys = BTreeMap<String, IgnoredAny>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// JSON for `.json` files, YAML for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse a custom resource document, or a bare spec when there is no top-level
/// `spec` key.
pub fn parse_manifest_str(
    src: &str,
    format: ManifestFormat,
) -> Result<IngressControllerManifest, ConfigError> {
    parse_manifest(src, format, Path::new(INLINE_SOURCE))
}

/// Parse just the spec, accepting either a full document or a bare spec.
pub fn parse_spec_str(src: &str, format: ManifestFormat) -> Result<IngressControllerSpec, ConfigError> {
    parse_manifest_str(src, format).map(|manifest| manifest.spec)
}

pub(crate) fn parse_manifest(
    src: &str,
    format: ManifestFormat,
    path: &Path,
) -> Result<IngressControllerManifest, ConfigError> {
    // Both passes read the source text directly. Going through an untyped value
    // would cap integers at 64 bits before the range checks see them.
    match format {
        ManifestFormat::Yaml => {
            let keys: TopLevelKeys =
                serde_yaml::from_str(src).map_err(|e| ConfigError::parse_yaml(path, e))?;

            if keys.contains_key("spec") {
                serde_yaml::from_str(src).map_err(|e| ConfigError::parse_yaml(path, e))
            } else {
                let spec = serde_yaml::from_str(src).map_err(|e| ConfigError::parse_yaml(path, e))?;
                Ok(IngressControllerManifest {
                    spec,
                    ..Default::default()
                })
            }
        }
        ManifestFormat::Json => {
            let keys: TopLevelKeys =
                serde_json::from_str(src).map_err(|e| ConfigError::parse_json(path, e))?;

            if keys.contains_key("spec") {
                serde_json::from_str(src).map_err(|e| ConfigError::parse_json(path, e))
            } else {
                let spec = serde_json::from_str(src).map_err(|e| ConfigError::parse_json(path, e))?;
                Ok(IngressControllerManifest {
                    spec,
                    ..Default::default()
                })
            }
        }
    }
}
