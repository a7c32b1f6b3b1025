use anyhow::Result;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use daily_recipe::{run, Config, SpoonacularClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let api = SpoonacularClient::new(&config.base_url, config.api_key.clone())?;

    // All pipeline failures resolve to a fallback decision inside `run`;
    // the process exits 0 either way so a scheduler never sees a failed job.
    run(&config, &api, Local::now().date_naive()).await;

    Ok(())
}
