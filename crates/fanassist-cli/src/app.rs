// Command execution: turn a lineup file into a settled, rendered entry.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use fanassist_core::grading::{apply_evaluations, evaluate_lineup, Evaluation, GameResult};
use fanassist_core::{Entry, PayoutResult, PlayMode};
use tracing::info;

use crate::config::{Config, WagerConfig};
use crate::lineup::{self, LineupFile};
use crate::report;

/// Options for a single `payout` run.
#[derive(Debug, Clone)]
pub struct PayoutRequest {
    pub lineup: PathBuf,
    pub mode: Option<PlayMode>,
    pub wager: Option<f64>,
    pub results: Option<PathBuf>,
    pub json: bool,
}

/// A priced entry, with per-leg evaluations when it was graded here.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub entry: Entry,
    pub evaluations: Option<Vec<Evaluation>>,
    pub result: PayoutResult,
}

/// Build the entry to price. Command-line values win over the file; the
/// wager falls back to the configured default.
pub fn resolve_entry(
    lineup: LineupFile,
    mode: Option<PlayMode>,
    wager: Option<f64>,
    wager_config: &WagerConfig,
) -> Result<Entry> {
    let Some(play_mode) = mode.or(lineup.play_mode) else {
        bail!("no play mode given; set \"playMode\" in the lineup or pass --mode power|flex");
    };
    let wager_amount = wager
        .or(lineup.wager_amount)
        .unwrap_or(wager_config.default_amount);
    check_wager(wager_amount, wager_config)?;

    Ok(Entry::new(lineup.picks, play_mode, wager_amount))
}

/// Reject wagers outside the configured bounds.
pub fn check_wager(amount: f64, wager_config: &WagerConfig) -> Result<()> {
    if !amount.is_finite() {
        bail!("wager must be a finite number, got {amount}");
    }
    if amount < wager_config.min_amount {
        bail!(
            "wager {amount} is below the minimum of {}",
            wager_config.min_amount
        );
    }
    if amount > wager_config.max_amount {
        bail!(
            "wager {amount} is above the maximum of {}",
            wager_config.max_amount
        );
    }
    Ok(())
}

/// Grade the entry against `results` when given, then price it.
pub fn settle(entry: Entry, results: Option<&[GameResult]>) -> Result<Settlement> {
    let (entry, evaluations) = match results {
        Some(results) => {
            let evaluations =
                evaluate_lineup(&entry.picks, results).context("failed to grade lineup")?;
            let picks = apply_evaluations(&entry.picks, &evaluations);
            (Entry { picks, ..entry }, Some(evaluations))
        }
        None => (entry, None),
    };

    let result = entry.calculate().context("failed to calculate payout")?;
    info!(
        "Settled {} entry: {} picks, multiplier {}x, payout {}",
        entry.play_mode,
        result.original_pick_count,
        result.multiplier,
        result.payout_amount
    );

    Ok(Settlement {
        entry,
        evaluations,
        result,
    })
}

/// Run the `payout` command and return the rendered output.
pub fn run_payout(config: &Config, request: &PayoutRequest) -> Result<String> {
    let lineup = lineup::load_lineup(&request.lineup)
        .with_context(|| format!("failed to load lineup {}", request.lineup.display()))?;
    info!(
        "Loaded lineup {} ({} picks)",
        request.lineup.display(),
        lineup.picks.len()
    );

    let entry = resolve_entry(lineup, request.mode, request.wager, &config.wager)?;

    let results = match &request.results {
        Some(path) => {
            let results = lineup::load_game_results(path)
                .with_context(|| format!("failed to load game results {}", path.display()))?;
            info!("Loaded {} game results from {}", results.len(), path.display());
            Some(results)
        }
        None => None,
    };

    let settlement = settle(entry, results.as_deref())?;

    if request.json {
        report::render_json(&settlement.result).context("failed to serialize payout result")
    } else {
        Ok(report::render_settlement(&settlement))
    }
}
