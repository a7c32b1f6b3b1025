//! The fetch-transform-write pipeline and its single failure handler.

use chrono::{Datelike, NaiveDate};

use crate::config::Config;
use crate::error::RunError;
use crate::fetch::{first_recipe, RecipeApi};
use crate::output;
use crate::run_log::RunLog;
use crate::tags::tag_for_date;
use crate::transform::transform_recipe;

/// How a run ended. Every variant is a normal completion; failures are
/// absorbed into the fallback decision and never escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fetched, transformed and saved a fresh record.
    Saved { title: String },
    /// Pipeline failed and no prior output existed; wrote the static record.
    FallbackWritten,
    /// Pipeline failed but a prior output exists; left it untouched.
    FallbackSkipped,
}

/// Execute one full run for `today`.
///
/// `today` is passed in (rather than read from the clock here) so the tag
/// and `lastUpdated` are deterministic under test.
pub async fn run(config: &Config, api: &dyn RecipeApi, today: NaiveDate) -> RunOutcome {
    let log = RunLog::new(&config.log_path);
    log.append("Starting recipe fetch process");

    let tag = tag_for_date(today);
    log.append(&format!(
        "Fetching recipe with day of year: {} (tag: {})",
        today.ordinal(),
        tag
    ));

    let outcome = match fetch_and_save(config, api, tag, today).await {
        Ok(title) => {
            log.append(&format!("Successfully fetched and saved recipe: {title}"));
            RunOutcome::Saved { title }
        }
        Err(e) => {
            log.append(&format!("ERROR: {e}"));
            handle_failure(config, today, &log)
        }
    };

    log.append("Recipe fetch process completed");
    outcome
}

/// The happy path: one fetch, one transform, one write.
async fn fetch_and_save(
    config: &Config,
    api: &dyn RecipeApi,
    tag: &str,
    today: NaiveDate,
) -> Result<String, RunError> {
    let body = api.random_recipe(tag).await?;
    let recipe = first_recipe(&body)?;
    let record = transform_recipe(&recipe, today)?;

    output::write_record(&config.output_path, &record)?;

    Ok(record.recipe.title)
}

/// Fallback decision: write the static record only on a first-ever run.
/// A failing fallback write is logged and otherwise ignored; the previous
/// output (if any) is the best state we can leave behind.
fn handle_failure(config: &Config, today: NaiveDate, log: &RunLog) -> RunOutcome {
    match output::write_fallback_if_absent(&config.output_path, today) {
        Ok(true) => {
            log.append("Created fallback recipe due to API failure");
            RunOutcome::FallbackWritten
        }
        Ok(false) => RunOutcome::FallbackSkipped,
        Err(e) => {
            log.append(&format!("ERROR: {e}"));
            RunOutcome::FallbackSkipped
        }
    }
}
