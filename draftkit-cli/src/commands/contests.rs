//! Contests command - list contests and their status

use anyhow::Result;
use colored::Colorize;
use draftkit_lib::contest::filter_contests;
use draftkit_lib::{ContestFilter, ContestStatus};
use std::path::{Path, PathBuf};

use crate::ui;

pub async fn run(
    storage_dir: &Path,
    filter: ContestFilter,
    file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    ui::header("Contests");

    let config = super::load_config(storage_dir)?;
    let contests = super::load_contests(storage_dir, &config, file)?;
    let now = super::now();

    let shown: Vec<_> = filter_contests(&contests, filter, now).collect();
    if shown.is_empty() {
        ui::info("No contests found");
        if config.contests_path.is_none() {
            ui::info("Pass --file or set contests_path in config.json");
        }
        return Ok(());
    }

    for contest in shown {
        let status = contest.status(now);
        let badge = match status {
            ContestStatus::Active => status.to_string().green().bold(),
            ContestStatus::Upcoming => status.to_string().yellow(),
            ContestStatus::Ended => status.to_string().dimmed(),
        };

        println!("\n{} {} [{}]", format!("#{}", contest.id).bold(), contest.title, badge);
        ui::key_value("  NFTs", &contest.nft_count.to_string());
        ui::key_value("  Entry fee", &format!("{} ETH", contest.entry_fee));
        ui::key_value("  Prize pool", &format!("{} ETH", contest.prize_pool));
        ui::key_value("  Time left", &contest.time_left(now));

        if verbose {
            ui::key_value(
                "  Deadline",
                &chrono::DateTime::from_timestamp(contest.deadline, 0)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
            );
        }
    }

    Ok(())
}
