use crate::conf::types::FieldPath;
use crate::conf::validation::error::ValidationErrors;
use miette::Diagnostic;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What is wrong with a field. Everything except [`ViolationKind::IgnoredField`]
/// blocks resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViolationKind {
    #[error("invalid value '{value}' (expected one of: {})", .allowed.join(", "))]
    InvalidEnum {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("value {value} is out of range (must be between {min} and {max})")]
    OutOfRange { value: i128, min: i128, max: i128 },

    #[error("malformed reference '{value}': {reason} (expected namespace/name)")]
    MalformedReference { value: String, reason: String },

    #[error("invalid format '{value}': {reason}")]
    InvalidFormat { value: String, reason: String },

    #[error("required field is missing")]
    MissingRequiredField,

    #[error("requires {requires} to be true")]
    UnmetDependency { requires: FieldPath },

    #[error("field is ignored: {reason}")]
    IgnoredField { reason: String },
}

impl ViolationKind {
    pub fn severity(&self) -> Severity {
        match self {
            ViolationKind::IgnoredField { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A single (field path, violation kind) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error, Diagnostic)]
#[error("{path}: {kind}")]
pub struct Violation {
    pub path: FieldPath,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind) -> Self {
        Self { path, kind }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

/// Accumulates violations across both resolution passes without stopping at the
/// first one.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

#[derive(Serialize)]
struct ViolationJson<'a> {
    severity: Severity,
    path: &'a FieldPath,
    #[serde(flatten)]
    kind: &'a ViolationKind,
    message: String,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: Vec<ViolationJson<'a>>,
    warnings: Vec<ViolationJson<'a>>,
}

fn violations_json(violations: &[Violation]) -> Vec<ViolationJson<'_>> {
    violations
        .iter()
        .map(|violation| ViolationJson {
            severity: violation.severity(),
            path: &violation.path,
            kind: &violation.kind,
            message: violation.kind.to_string(),
        })
        .collect()
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn push(&mut self, violation: Violation) {
        match violation.severity() {
            Severity::Error => self.errors.push(violation),
            Severity::Warning => self.warnings.push(violation),
        }
    }

    /// Warnings on success, every hard violation otherwise.
    pub fn into_result(self) -> Result<Vec<Violation>, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(ValidationErrors(self.errors))
        }
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let json = ValidationReportJson {
            errors: violations_json(&self.errors),
            warnings: violations_json(&self.warnings),
        };

        serde_json::to_string_pretty(&json)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for violation in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match violation.severity() {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let _ = writeln!(out, "{}: {}: {}", violation.path, severity, violation.kind);
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();

        if self.has_violations() {
            let _ = writeln!(
                out,
                "configuration validation failed ({} errors, {} warnings)\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        for violation in &self.errors {
            let _ = writeln!(
                out,
                "  {}: {}\n    {}\n",
                "error".red().bold(),
                violation.path.bold(),
                violation.kind
            );
        }
        for violation in &self.warnings {
            let _ = writeln!(
                out,
                "  {}: {}\n    {}\n",
                "warning".yellow().bold(),
                violation.path.bold(),
                violation.kind
            );
        }

        out
    }
}

/// Type, enum, range and shape violations.
impl ValidationReport {
    pub fn missing_required_field(&mut self, path: &FieldPath) {
        self.push(Violation::new(path.clone(), ViolationKind::MissingRequiredField));
    }

    pub fn invalid_enum(&mut self, path: &FieldPath, value: &str, allowed: &'static [&'static str]) {
        self.push(Violation::new(
            path.clone(),
            ViolationKind::InvalidEnum {
                value: value.to_owned(),
                allowed,
            },
        ));
    }

    pub fn out_of_range(&mut self, path: &FieldPath, value: i128, min: i128, max: i128) {
        self.push(Violation::new(
            path.clone(),
            ViolationKind::OutOfRange { value, min, max },
        ));
    }

    pub fn malformed_reference(&mut self, path: &FieldPath, value: &str, reason: String) {
        self.push(Violation::new(
            path.clone(),
            ViolationKind::MalformedReference {
                value: value.to_owned(),
                reason,
            },
        ));
    }

    pub fn invalid_format(&mut self, path: &FieldPath, value: &str, reason: String) {
        self.push(Violation::new(
            path.clone(),
            ViolationKind::InvalidFormat {
                value: value.to_owned(),
                reason,
            },
        ));
    }
}

/// Cross-field violations.
impl ValidationReport {
    pub fn unmet_dependency(&mut self, path: &FieldPath, requires: &FieldPath) {
        self.push(Violation::new(
            path.clone(),
            ViolationKind::UnmetDependency {
                requires: requires.clone(),
            },
        ));
    }

    pub fn ignored_field(&mut self, path: &FieldPath, reason: &str) {
        self.push(Violation::new(
            path.clone(),
            ViolationKind::IgnoredField {
                reason: reason.to_owned(),
            },
        ));
    }
}
