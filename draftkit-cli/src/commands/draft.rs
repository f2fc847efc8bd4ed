//! Draft command - pick NFTs for a contest entry and submit it

use anyhow::{Context, Result};
use colored::Colorize;
use draftkit_lib::catalog::ItemId;
use draftkit_lib::selection::RejectReason;
use draftkit_lib::{
    Amount, CatalogOrigin, Constraints, DraftConfig, DraftkitError, SelectionSession,
    ToggleOutcome,
};
use std::path::{Path, PathBuf};

use crate::ui;

/// Arguments of the draft command
pub struct DraftOptions {
    pub contest_id: u64,
    pub count: Option<usize>,
    pub budget: Option<String>,
    pub catalog: Option<PathBuf>,
    pub picks: Vec<String>,
    pub interactive: bool,
    pub dry_run: bool,
}

pub async fn run(storage_dir: &Path, options: DraftOptions, verbose: bool) -> Result<()> {
    ui::header(&format!("Draft for contest #{}", options.contest_id));

    let config = super::load_config(storage_dir)?;
    let budget = match options.budget.as_deref() {
        Some(value) => super::parse_budget(value)?,
        None => config.budget_limit,
    };
    let constraints = resolve_constraints(storage_dir, &config, &options, budget)?;

    let source = super::catalog_source(storage_dir, &config, options.catalog.clone());
    let spinner = ui::spinner("Loading catalog...");
    let mut session = SelectionSession::start_with_weights(
        options.contest_id,
        source.as_ref(),
        constraints,
        &config.weights,
    )
    .await;
    spinner.finish_and_clear();

    if verbose && session.catalog_origin() == CatalogOrigin::Fallback {
        ui::warning("Catalog source unavailable, using the built-in catalog");
    }

    ui::key_value(
        "Pick",
        &session.engine().constraints().required_count.to_string(),
    );
    ui::key_value("Budget", &budget.to_string());

    for pick in &options.picks {
        let id = ItemId::new(pick.trim());
        let outcome = session.toggle(&id);
        report(&session, &id, outcome);
    }

    if options.interactive && !pick_interactively(&mut session)? {
        ui::info("Draft cancelled");
        return Ok(());
    }

    print_summary(&session);

    if options.dry_run {
        if session.can_submit() {
            ui::info("Dry run - entry is complete and was not submitted");
        } else {
            ui::info("Dry run - entry is incomplete");
        }
        return Ok(());
    }

    let sink = super::submission_sink(storage_dir, &config);
    match session.submit(&sink).await {
        Ok(submission) => {
            ui::success(&format!(
                "Entry submitted to contest #{}",
                submission.contest_id
            ));
            Ok(())
        }
        Err(err @ DraftkitError::Validation { .. }) => {
            ui::error(&format!("Cannot submit: {}", err));
            Err(err.into())
        }
        Err(err) => Err(err).context("Submission failed"),
    }
}

/// Constraints from --count, or from the contest list when no count is given
fn resolve_constraints(
    storage_dir: &Path,
    config: &DraftConfig,
    options: &DraftOptions,
    budget: Amount,
) -> Result<Constraints> {
    if let Some(count) = options.count {
        return Ok(Constraints::new(count, budget)?);
    }

    let contests = super::load_contests(storage_dir, config, None)?;
    let contest = contests
        .iter()
        .find(|c| c.id == options.contest_id)
        .with_context(|| {
            format!(
                "Contest #{} not found; pass --count to draft without a contest list",
                options.contest_id
            )
        })?;

    if !contest.is_open(super::now()) {
        anyhow::bail!("Contest #{} has ended", contest.id);
    }

    ui::key_value("Contest", &contest.title);
    Ok(contest.constraints(budget)?)
}

/// Toggle items from a menu until the participant submits or quits.
///
/// Returns false if they quit.
fn pick_interactively(session: &mut SelectionSession) -> Result<bool> {
    loop {
        let engine = session.engine();
        let ids: Vec<ItemId> = engine.catalog().iter().map(|item| item.id.clone()).collect();
        let mut choices: Vec<String> = engine.items().map(|view| ui::item_line(&view)).collect();
        choices.push("Submit".bold().to_string());
        choices.push("Quit".to_string());

        let prompt = format!(
            "{}/{} selected, {} left",
            engine.len(),
            engine.constraints().required_count,
            engine.remaining_budget()
        );
        let required = engine.constraints().required_count;

        let choice = ui::select(&prompt, &choices)?;
        if let Some(id) = ids.get(choice) {
            let outcome = session.toggle(id);
            report(session, id, outcome);
        } else if choice == ids.len() {
            if session.can_submit() {
                return Ok(true);
            }
            ui::warning(&format!("Select exactly {} items to submit", required));
        } else {
            return Ok(false);
        }
    }
}

fn report(session: &SelectionSession, id: &ItemId, outcome: ToggleOutcome) {
    let name = session
        .engine()
        .catalog()
        .get(id)
        .map(|item| item.name.clone())
        .unwrap_or_else(|| id.to_string());

    match outcome {
        ToggleOutcome::Selected => ui::success(&format!("Selected {}", name)),
        ToggleOutcome::Deselected => ui::info(&format!("Removed {}", name)),
        ToggleOutcome::Rejected(reason) => {
            ui::warning(&format!("Cannot select {}: {}", name, reject_text(reason)))
        }
    }
}

fn reject_text(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::SelectionFull => "selection is full",
        RejectReason::OverBudget => "over budget",
        RejectReason::UnknownItem => "not in the catalog",
    }
}

fn print_summary(session: &SelectionSession) {
    let engine = session.engine();
    ui::separator();
    for view in engine.items().filter(|view| view.selected) {
        println!("  {}", ui::item_line(&view));
    }
    ui::key_value(
        "Selected",
        &format!("{}/{}", engine.len(), engine.constraints().required_count),
    );
    ui::key_value("Spent", &engine.spent().to_string());
    ui::key_value("Remaining", &engine.remaining_budget().to_string());
}
