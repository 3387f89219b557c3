use crate::conf::error::ConfigError;
use crate::conf::parse::{ManifestFormat, parse_manifest};
use crate::conf::types::{IngressControllerManifest, IngressControllerSpec};
use crate::conf::validation::{ValidatedConfig, resolve};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read and parse a manifest file. IO and parse failures are hard failures.
pub fn load_manifest(path: &Path) -> Result<IngressControllerManifest, ConfigError> {
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let format = ManifestFormat::from_path(path);
    debug!(path = %path.display(), ?format, "parsing ingress controller manifest");
    parse_manifest(&src, format, path)
}

pub fn load_spec(path: &Path) -> Result<IngressControllerSpec, ConfigError> {
    load_manifest(path).map(|manifest| manifest.spec)
}

/// Read, parse and resolve a manifest file.
pub fn load_config(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let manifest = load_manifest(path)?;
    let resource = manifest.metadata.display_name();

    //--------------------------------------------------------------------------
    // Resolution (aggregates all violations)
    //--------------------------------------------------------------------------
    let validated = match resolve(&manifest.spec) {
        Ok(validated) => validated,
        Err(errors) => {
            warn!(
                resource = %resource,
                violations = errors.len(),
                "ingress controller configuration rejected"
            );
            return Err(ConfigError::validation(path, errors));
        }
    };

    for warning in &validated.warnings {
        warn!(
            resource = %resource,
            field = %warning.path,
            "{}",
            warning.kind
        );
    }

    info!(
        resource = %resource,
        deployment_type = %validated.config.deployment_type,
        service_type = %validated.config.service_type,
        status_source = %validated.config.status_source,
        "ingress controller configuration resolved"
    );

    Ok(validated)
}
