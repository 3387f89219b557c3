use crate::conf::types::FieldPath;
use crate::conf::validation::ValidationReport;
use crate::conf::validation::validator::Checked;

/// Inclusive bounds for an integer field.
#[derive(Debug, Clone, Copy)]
pub struct RangeConstraint {
    pub min: i128,
    pub max: i128,
}

pub const LOG_LEVEL: RangeConstraint = RangeConstraint { min: 0, max: 3 };

pub const LISTEN_PORT: RangeConstraint = RangeConstraint {
    min: 1023,
    max: 65535,
};

pub const REPLICA_COUNT: RangeConstraint = RangeConstraint {
    min: 0,
    max: i32::MAX as i128,
};

pub const RELOAD_TIMEOUT_MS: RangeConstraint = RangeConstraint {
    min: 1,
    max: i32::MAX as i128,
};

pub const APP_PROTECT_DOS_LIMIT: RangeConstraint = RangeConstraint {
    min: 0,
    max: i32::MAX as i128,
};

/// Check `value` against `constraint` and narrow it to the field's resolved type.
pub fn validate_range<T>(
    value: i128,
    constraint: &RangeConstraint,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<T>
where
    T: TryFrom<i128>,
{
    if value < constraint.min || value > constraint.max {
        report.out_of_range(path, value, constraint.min, constraint.max);
        return None;
    }

    match T::try_from(value) {
        Ok(narrowed) => Some(narrowed),
        Err(_) => {
            report.out_of_range(path, value, constraint.min, constraint.max);
            None
        }
    }
}

/// Like [`validate_range`], for fields that may be omitted.
pub fn validate_optional_range<T>(
    value: Option<i128>,
    constraint: &RangeConstraint,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Option<T>>
where
    T: TryFrom<i128>,
{
    match value {
        Some(v) => validate_range(v, constraint, report, path).map(Some),
        None => Some(None),
    }
}
