use crate::conf::types::{FieldPath, WireEnum};
use crate::conf::validation::ValidationReport;
use crate::conf::validation::validator::Checked;

/// Check a required closed-set field. Omission and unknown spellings are both
/// reported.
pub fn validate_required_enum<T: WireEnum>(
    value: Option<&str>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<T> {
    let Some(value) = value else {
        report.missing_required_field(path);
        return None;
    };

    let parsed = T::from_wire(value);
    if parsed.is_none() {
        report.invalid_enum(path, value, T::ALLOWED);
    }
    parsed
}
