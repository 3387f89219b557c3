mod dependencies;
mod error;
mod fields;
mod report;
mod resolve;
#[cfg(test)]
mod tests;
mod validated_config;
pub mod validator;

pub use dependencies::derive_status_source;
pub use error::ValidationErrors;
pub use report::*;
pub use resolve::resolve;
pub use validated_config::ValidatedConfig;
