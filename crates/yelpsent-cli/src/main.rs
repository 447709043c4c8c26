use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use yelpsent_core::Config;
use yelpsent_core::config::{DEFAULT_MODEL, DEFAULT_OUTPUT_DIR, DEFAULT_REVIEWS, DEFAULT_VERBOSITY};

mod commands;
mod display;

/// Load Yelp reviews, train and apply a sentiment model, and score it
/// against star ratings.
#[derive(Parser)]
#[command(name = "yelpsent", version)]
struct Cli {
    /// Reviews file used when a command's input is `.`
    #[arg(long, env = "YELPSENT_REVIEWS", default_value = DEFAULT_REVIEWS, global = true)]
    reviews: PathBuf,

    /// Directory for split review files
    #[arg(long, env = "YELPSENT_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR, global = true)]
    output_dir: PathBuf,

    /// Persisted sentiment model
    #[arg(long, env = "YELPSENT_MODEL", default_value = DEFAULT_MODEL, global = true)]
    model: PathBuf,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every review in a reviews file
    Print {
        /// Reviews file (JSON, optionally .gz), or `.` for the default
        file: PathBuf,
    },
    /// Write each review's text to its own file in the output directory
    Split {
        /// Reviews file (JSON, optionally .gz), or `.` for the default
        file: PathBuf,
        /// File name prefix for the split files
        prefix: String,
    },
    /// Train a sentiment model and persist it
    Train {
        /// Reviews file, `.` for the default, or a directory of split files
        source: PathBuf,
    },
    /// Score every .txt file in a directory with the persisted model
    #[command(name = "ratedir")]
    RateDir {
        /// Directory of text files
        dir: PathBuf,
    },
    /// Score reviews with the persisted model and compare against star ratings
    #[command(name = "oldsentiment")]
    OldSentiment {
        /// Reviews file (JSON, optionally .gz), or `.` for the default
        file: PathBuf,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_reviews_path(&self.reviews)
            .with_output_dir(&self.output_dir)
            .with_model_path(&self.model)
            .with_verbosity(
                DEFAULT_VERBOSITY
                    .saturating_add(self.verbose)
                    .saturating_sub(self.quiet),
            )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("yelpsent v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Print { file } => commands::print(&config, &file),
        Command::Split { file, prefix } => commands::split(&config, &file, &prefix),
        Command::Train { source } => commands::train(&config, &source),
        Command::RateDir { dir } => commands::rate_dir(&config, &dir),
        Command::OldSentiment { file } => commands::old_sentiment(&config, &file),
    }
}
