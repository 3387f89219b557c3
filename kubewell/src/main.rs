use clap::{Parser, Subcommand};
use kubewell_core::cli::conf::{self, ConfigCmd};
use kubewell_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "kubewell",
    version,
    about = "Kubewell: ingress controller configuration tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// IngressController manifest tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Config { cmd } => {
            init_logging();

            if let Err(e) = conf::run(cmd) {
                tracing::error!(error = %e, "config command failed");
                eprintln!("config error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
