//! accelgen CLI: generates or updates the documents of an accelerator repository.
//!
//! Reads `.resources/accelerator_def.xml` from the repository and renders the README
//! and example script next to it. The work is delegated to
//! [`accelgen_core::generator::Generator`].

mod commands;
mod output;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "accelgen",
    about = "Generate or update accelerator repository files from .resources/accelerator_def.xml",
    version
)]
struct Cli {
    /// Path to the repository directory
    #[arg(long, env = "ACCELGEN_PATH", default_value = ".")]
    path: PathBuf,

    /// Accelerator definition to read (default: <path>/.resources/accelerator_def.xml)
    #[arg(long)]
    definition: Option<PathBuf>,

    /// Render the templates of this directory instead of the built-in ones
    #[arg(long, env = "ACCELGEN_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    commands::generate::run(&cli.path, cli.definition.as_deref(), cli.templates)
}
