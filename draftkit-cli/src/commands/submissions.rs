//! Submissions command - show stored entries for a contest

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, contest_id: u64, verbose: bool) -> Result<()> {
    ui::header(&format!("Submissions for contest #{}", contest_id));

    let config = super::load_config(storage_dir)?;
    let sink = super::submission_sink(storage_dir, &config);
    let submissions = sink.list(contest_id).await?;

    if submissions.is_empty() {
        ui::info("No submissions found");
        return Ok(());
    }

    for (n, submission) in submissions.iter().enumerate() {
        println!("\n{}", format!("Entry {}", n + 1).bold());
        let items: Vec<&str> = submission.items.iter().map(|id| id.as_str()).collect();
        ui::key_value("  Items", &items.join(", "));
        ui::key_value("  Spent", &submission.spent.to_string());
        ui::key_value(
            "  Submitted",
            &chrono::DateTime::from_timestamp(submission.submitted_at, 0)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        );
        if verbose {
            ui::json(&serde_json::to_value(submission)?);
        }
    }

    Ok(())
}
