use crate::conf::types::ResolvedConfig;
use crate::conf::validation::report::Violation;

/// Successful outcome of resolution: the config plus any warning-class violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub config: ResolvedConfig,
    pub warnings: Vec<Violation>,
}
