//! CLI Adapter.

mod generate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sweeper")]
#[command(version)]
#[command(about = "Generate shell scripts for a YAML parameter sweep", long_about = None)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate scripts and output folders for every parameter combination
    #[clap(visible_alias = "g")]
    Gen(generate::GenArgs),
    /// Print every parameter combination, one per line
    #[clap(visible_alias = "x")]
    Expand {
        /// Sweep configuration file
        config: std::path::PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Gen(args) => generate::run_gen(args),
        Commands::Expand { config } => run_expand(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,sweeper=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_expand(config: &std::path::Path) -> Result<(), AppError> {
    for params in crate::app::api::expand_config(config)? {
        println!("{}", params);
    }
    Ok(())
}
