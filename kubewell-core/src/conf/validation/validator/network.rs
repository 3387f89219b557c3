use crate::conf::types::FieldPath;
use crate::conf::validation::ValidationReport;
use crate::conf::validation::validator::Checked;
use ipnet::IpNet;
use std::net::IpAddr;

/// Check a comma separated list of IP addresses and CIDR blocks.
///
/// Returns the list with whitespace around entries removed.
pub fn validate_allow_cidrs(
    value: &str,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<String> {
    let mut entries = Vec::new();

    for entry in value.split(',').map(str::trim) {
        if entry.is_empty() {
            report.invalid_format(path, value, "empty entry in address list".to_string());
            return None;
        }
        if entry.parse::<IpAddr>().is_err() && entry.parse::<IpNet>().is_err() {
            report.invalid_format(
                path,
                value,
                format!("'{entry}' is not an IP address or CIDR block"),
            );
            return None;
        }
        entries.push(entry);
    }

    Some(entries.join(","))
}

/// Check that a location URI is absolute.
pub fn validate_location_uri(
    value: &str,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<String> {
    if !value.starts_with('/') {
        report.invalid_format(path, value, "location must start with '/'".to_string());
        return None;
    }
    if value.chars().any(char::is_whitespace) {
        report.invalid_format(path, value, "location must not contain whitespace".to_string());
        return None;
    }
    Some(value.to_owned())
}
