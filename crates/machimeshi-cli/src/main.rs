//! Batch enrichment pipeline over the shop directory data file.
//!
//! Every command is a load → transform → save pass: the libraries stay
//! pure, this binary owns all file I/O.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod data;
mod enrich;
mod genres;
mod stats;


#[derive(Debug, Parser)]
#[command(name = "machimeshi-cli")]
#[command(about = "Shop directory enrichment pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Re-parse every shop's business hours into the structured form.
    Enrich {
        /// Path to the shops data file.
        #[arg(long, env = "MACHIMESHI_DATA_FILE", default_value = "docs/data/shops.json")]
        data_file: PathBuf,
        /// Process only the first N shops.
        #[arg(long)]
        limit: Option<usize>,
        /// Report what would change without saving.
        #[arg(long)]
        dry_run: bool,
    },
    /// Drop noise genres and infer missing ones from names and URLs.
    CleanGenres {
        /// Path to the shops data file.
        #[arg(long, env = "MACHIMESHI_DATA_FILE", default_value = "docs/data/shops.json")]
        data_file: PathBuf,
        /// Extra tokens to exclude on top of the built-in noise list.
        #[arg(long = "exclude")]
        excluded: Vec<String>,
        /// Report what would change without saving.
        #[arg(long)]
        dry_run: bool,
    },
    /// Summarize hours-parse coverage of the data file.
    Stats {
        /// Path to the shops data file.
        #[arg(long, env = "MACHIMESHI_DATA_FILE", default_value = "docs/data/shops.json")]
        data_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Enrich {
            data_file,
            limit,
            dry_run,
        }) => enrich::run(&data_file, limit, dry_run),
        Some(Commands::CleanGenres {
            data_file,
            excluded,
            dry_run,
        }) => genres::run(&data_file, &excluded, dry_run),
        Some(Commands::Stats { data_file }) => stats::run(&data_file),
        None => {
            println!("machimeshi-cli: no command given (try enrich, clean-genres, stats)");
            Ok(())
        }
    }
}
