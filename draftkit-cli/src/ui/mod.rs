//! Terminal UI utilities

use colored::Colorize;
use draftkit_lib::selection::ItemView;
use draftkit_lib::CatalogItem;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Create a spinner progress indicator
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prompt for user confirmation
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick one entry from a list
pub fn select(prompt: &str, items: &[String]) -> anyhow::Result<usize> {
    use dialoguer::Select;
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// Print a separator line
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Print JSON prettily
pub fn json(value: &serde_json::Value) {
    if let Ok(pretty) = serde_json::to_string_pretty(value) {
        println!("{}", pretty);
    }
}

/// Item text shared by every listing: id, name, collection, cost.
pub fn item_label(item: &CatalogItem) -> String {
    let collection = item
        .collection
        .as_deref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();
    format!("[{}] {}{} - {}", item.id, item.name, collection, item.cost)
}

/// One selectable catalog line: a selection marker and [`item_label`].
///
/// Selected items are bold green, disabled items are dimmed.
pub fn item_line(view: &ItemView<'_>) -> String {
    let marker = if view.selected { "●" } else { "○" };
    let line = format!("{} {}", marker, item_label(view.item));

    if view.selected {
        line.green().bold().to_string()
    } else if !view.selectable {
        line.dimmed().to_string()
    } else {
        line
    }
}
