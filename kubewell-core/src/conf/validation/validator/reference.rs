use crate::conf::types::{FieldPath, ResourceRef};
use crate::conf::validation::ValidationReport;
use crate::conf::validation::validator::{Checked, non_empty};

/// Check an optional `namespace/name` field. Empty strings count as unset.
pub fn validate_reference(
    value: &Option<String>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Option<ResourceRef>> {
    let Some(raw) = non_empty(value) else {
        return Some(None);
    };

    match raw.parse::<ResourceRef>() {
        Ok(reference) => Some(Some(reference)),
        Err(err) => {
            report.malformed_reference(path, raw, err.to_string());
            None
        }
    }
}
