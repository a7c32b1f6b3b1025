pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod run;
pub mod run_log;
pub mod tags;
pub mod transform;
pub mod types;

pub use config::Config;
pub use error::{FetchError, RunError, TransformError, WriteError};
pub use fetch::{first_recipe, MockApi, MockResponse, RecipeApi, SpoonacularClient};
pub use output::{read_record, write_fallback_if_absent, write_record};
pub use run::{run, RunOutcome};
pub use run_log::RunLog;
pub use tags::{tag_for_date, TAGS};
pub use transform::transform_recipe;
pub use types::{RecipeDetail, RecipeRecord, SCHEMA_VERSION};
