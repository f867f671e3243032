//! Gradebook Console
//!
//! Runs the interactive menu on stdin/stdout.

use std::io;

use clap::Parser;
use gradebook::shell::Shell;
use gradebook::{Config, Gradebook, RankingStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// Gradebook console
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Manage a student score roster with ranking and binary persistence")]
#[command(version)]
struct Args {
    /// Roster data file
    #[arg(short = 'f', long, default_value = gradebook::config::DEFAULT_DATA_FILE)]
    data_file: String,

    /// Ranking strategy (pairwise or sorted)
    #[arg(short, long, default_value = "pairwise")]
    ranking: RankingStrategy,

    /// Do not load the data file at startup
    #[arg(long)]
    no_autoload: bool,
}

fn main() {
    // Logs go to stderr so they never interleave with the grade table
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Gradebook v{}", gradebook::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Ranking: {}", args.ranking);

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .ranking(args.ranking)
        .autoload(!args.no_autoload)
        .build();

    let stdin = io::stdin();
    let mut shell = Shell::new(Gradebook::new(config), stdin.lock(), io::stdout());

    if let Err(e) = shell.run() {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }

    shell.into_gradebook().close();
}
