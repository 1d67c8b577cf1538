//! Terminal frontend for Tales of Razukan.

mod play;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "razukan",
    about = "Tales of Razukan, a text adventure",
    version
)]
struct Cli {
    /// Directory for save files
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,

    /// Seed for the random number generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = play::run(cli.save_dir, cli.seed) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
