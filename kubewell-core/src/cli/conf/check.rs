use crate::conf::validation::ValidationReport;
use crate::conf::{ConfigError, load_config};
use miette::Report;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

pub fn check(path: PathBuf, format: ReportFormat) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(validated) => {
            let cfg = &validated.config;
            println!("✔ Manifest resolved successfully");
            println!("✔ {} via {}", cfg.deployment_type, cfg.service_type);
            println!("✔ image {}", cfg.image.reference());
            println!("✔ status source: {}", cfg.status_source);
            println!("✔ {} warnings", validated.warnings.len());

            if !validated.warnings.is_empty() {
                let report = ValidationReport {
                    errors: vec![],
                    warnings: validated.warnings,
                };
                println!();
                print!("{}", render(&report, format)?);
            }
            Ok(())
        }
        Err(ConfigError::Validation { source, .. }) => {
            let report = ValidationReport {
                errors: source.0,
                warnings: vec![],
            };
            eprint!("{}", render(&report, format)?);
            std::process::exit(1);
        }
        Err(err) => {
            print_config_error(err, format);
            std::process::exit(1);
        }
    }
}

fn render(report: &ValidationReport, format: ReportFormat) -> anyhow::Result<String> {
    Ok(match format {
        ReportFormat::Pretty => report.render_pretty(),
        ReportFormat::Plain => report.render_plain(),
        ReportFormat::Json => report.render_json()? + "\n",
    })
}

fn print_config_error(err: ConfigError, format: ReportFormat) {
    let hint = config_error_hint(&err);
    if format == ReportFormat::Pretty {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    } else {
        eprintln!("{}", err);
    }
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Pass the path of an IngressController manifest.\n\
             \n\
             Create one with:\n\
             \n\
             kubewell config init ingresscontroller.yaml",
        ),

        ConfigError::ParseYaml { .. } | ConfigError::ParseJson { .. } => Some(
            "The manifest could not be read as an IngressController.\n\
             \n\
             Booleans must be true/false, numbers must be plain integers and\n\
             extraConfigEntries values must be quoted strings.",
        ),

        ConfigError::Validation { .. } => None,
    }
}
