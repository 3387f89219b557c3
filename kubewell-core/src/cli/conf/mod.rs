mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate an IngressController manifest and exit
    Check {
        /// Path to the manifest (YAML or JSON)
        path: PathBuf,

        /// Print violations without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,

        /// Print violations as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Print the resolved configuration
    Dump {
        /// Path to the manifest (YAML or JSON)
        path: PathBuf,

        /// Output as YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },

    /// Write a minimal example manifest
    Init {
        /// Path of the manifest to create
        #[arg(default_value = "ingresscontroller.yaml")]
        path: PathBuf,
    },
}

/// Dispatch a `config` subcommand.
pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain, json } => {
            let format = if json {
                ReportFormat::Json
            } else if plain {
                ReportFormat::Plain
            } else {
                ReportFormat::Pretty
            };
            check(path, format)
        }
        ConfigCmd::Dump { path, yaml } => dump(path, yaml),
        ConfigCmd::Init { path } => init(path),
    }
}
