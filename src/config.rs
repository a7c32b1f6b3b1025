//! Configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default Spoonacular base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default path for the generated recipe file.
pub const DEFAULT_OUTPUT_PATH: &str = "daily_recipe.json";

/// Default path for the append-only run log.
pub const DEFAULT_LOG_PATH: &str = "fetch_log.txt";

/// Runtime configuration.
///
/// The output and log paths are injected here (rather than hardcoded at the
/// use sites) so tests can point them at temporary directories.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spoonacular API key. Absence surfaces as a fetch-time error, not a
    /// startup failure, so a scheduled run still completes with fallback.
    pub api_key: Option<String>,
    /// Base URL for the recipe API.
    pub base_url: String,
    /// Where the recipe record is written.
    pub output_path: PathBuf,
    /// Where run log lines are appended.
    pub log_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SPOONACULAR_API_KEY`: API key for Spoonacular
    /// - `RECIPE_API_BASE_URL`: API base URL (default: "https://api.spoonacular.com")
    /// - `RECIPE_OUTPUT_PATH`: recipe file path (default: "daily_recipe.json")
    /// - `RECIPE_LOG_PATH`: run log path (default: "fetch_log.txt")
    pub fn from_env() -> Self {
        let api_key = env::var("SPOONACULAR_API_KEY").ok().filter(|k| !k.is_empty());

        let base_url =
            env::var("RECIPE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let output_path = env::var("RECIPE_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        let log_path = env::var("RECIPE_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH));

        Self {
            api_key,
            base_url,
            output_path,
            log_path,
        }
    }
}
