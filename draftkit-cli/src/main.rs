//! Draftkit CLI
//!
//! Command-line front end for browsing contests and drafting entries.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use draftkit_lib::ContestFilter;
use std::path::PathBuf;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "draftkit")]
#[command(about = "Draftkit - draft NFT fantasy contest entries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory
    #[arg(long, global = true, env = "DRAFTKIT_DIR")]
    storage_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.json to the storage directory
    Init {
        /// Budget limit per entry
        #[arg(long)]
        budget: Option<String>,

        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Contest list JSON file
        #[arg(long)]
        contests: Option<PathBuf>,

        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },

    /// List contests
    Contests {
        /// Which contests to show
        #[arg(short, long, value_enum, default_value = "all")]
        filter: FilterArg,

        /// Contest list JSON file (overrides config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show the NFT catalog
    Catalog {
        /// Catalog JSON file (overrides config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Draft and submit an entry
    Draft {
        /// Contest id
        contest: u64,

        /// Number of NFTs to pick (defaults to the contest's count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Budget limit (overrides config)
        #[arg(short, long)]
        budget: Option<String>,

        /// Catalog JSON file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Item ids to toggle, in order
        #[arg(short, long, value_delimiter = ',')]
        pick: Vec<String>,

        /// Pick interactively
        #[arg(short, long)]
        interactive: bool,

        /// Show the result without submitting
        #[arg(long)]
        dry_run: bool,
    },

    /// Show submitted entries for a contest
    Submissions {
        /// Contest id
        contest: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Active,
    Upcoming,
}

impl From<FilterArg> for ContestFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ContestFilter::All,
            FilterArg::Active => ContestFilter::Active,
            FilterArg::Upcoming => ContestFilter::Upcoming,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays parseable
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("draftkit=debug,draftkit_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("draftkit=info,draftkit_lib=error")
            .with_writer(std::io::stderr)
            .init();
    }

    let storage_dir = cli.storage_dir.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("draftkit")
    });

    match cli.command {
        Commands::Init {
            budget,
            catalog,
            contests,
            force,
        } => {
            commands::init::run(
                &storage_dir,
                budget.as_deref(),
                catalog,
                contests,
                force,
                cli.verbose,
            )
            .await?;
        }
        Commands::Contests { filter, file } => {
            commands::contests::run(&storage_dir, filter.into(), file, cli.verbose).await?;
        }
        Commands::Catalog { file } => {
            commands::catalog::run(&storage_dir, file, cli.verbose).await?;
        }
        Commands::Draft {
            contest,
            count,
            budget,
            catalog,
            pick,
            interactive,
            dry_run,
        } => {
            let options = commands::draft::DraftOptions {
                contest_id: contest,
                count,
                budget,
                catalog,
                picks: pick,
                interactive,
                dry_run,
            };
            commands::draft::run(&storage_dir, options, cli.verbose).await?;
        }
        Commands::Submissions { contest } => {
            commands::submissions::run(&storage_dir, contest, cli.verbose).await?;
        }
    }

    Ok(())
}
