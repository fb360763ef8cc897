//! Leibniz CLI
//!
//! Prints Leibniz-series approximations of pi and their error for a list of
//! term counts.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use leibniz_core::{RunConfig, Strategy, driver};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "leibniz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with partial sums of the Leibniz series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Comma-separated term counts to evaluate (default: 1,5,10,50,100)
    #[arg(
        short,
        long,
        value_name = "LIST",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    terms: Option<Vec<i64>>,

    /// Summation strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Path to a run configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Logs go to stderr; stdout carries only report lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => run_completions(shell),
        None => run_report(cli.config.as_deref(), cli.terms, cli.strategy),
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "leibniz", &mut io::stdout());
}

fn run_report(
    config_path: Option<&Path>,
    terms: Option<Vec<i64>>,
    strategy: Option<Strategy>,
) {
    // Defaults, then the config file, then command-line flags
    let mut config = match config_path {
        Some(path) => match RunConfig::load(path) {
            Ok(c) => {
                info!(
                    path = %path.display(),
                    terms = c.terms.len(),
                    strategy = %c.strategy,
                    "loaded run config"
                );
                c
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(terms) = terms {
        info!(terms = terms.len(), "term counts set from --terms");
        config = config.with_terms(terms);
    }
    if let Some(strategy) = strategy {
        info!(%strategy, "strategy set from --strategy");
        config = config.with_strategy(strategy);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = driver::run(&config, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
