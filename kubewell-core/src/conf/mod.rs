mod error;
mod loader;
mod parse;
pub mod types;
pub mod validation;

pub use error::ConfigError;
pub use loader::{load_config, load_manifest, load_spec};
pub use parse::{ManifestFormat, parse_manifest_str, parse_spec_str};
pub use types::{IngressControllerSpec, ResolvedConfig};
pub use validation::{ValidatedConfig, ValidationErrors, resolve};
