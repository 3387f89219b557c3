use crate::conf::validation::ValidationErrors;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read manifest {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid YAML manifest: {path}\n\n{source}")]
    #[diagnostic(help("field values must have the types documented for the IngressController spec"))]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON manifest: {path}\n\n{source}")]
    #[diagnostic(help("field values must have the types documented for the IngressController spec"))]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    //-------------------------------------------------------------------------
    // Resolution
    //-------------------------------------------------------------------------
    #[error("invalid ingress controller configuration in {path}")]
    Validation {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: ValidationErrors,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse_yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ParseYaml {
            path: path.into(),
            source,
        }
    }

    pub fn parse_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseJson {
            path: path.into(),
            source,
        }
    }

    pub fn validation(path: impl Into<PathBuf>, source: ValidationErrors) -> Self {
        Self::Validation {
            path: path.into(),
            source,
        }
    }

    /// The hard violations, when resolution was what failed.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}
