mod config;
mod driver;
mod error;
mod evaluator;
mod prompt;

use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use evaluator::OpenAiEvaluator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting notional machine evaluation");

    // 1. Credential and client settings from the environment (and `.env`)
    let config = Config::from_env().inspect_err(|e| error!(error = %e, "cannot start"))?;
    info!(
        base_url = %config.openai.base_url,
        timeout_ms = config.openai.default_timeout.as_millis(),
        model = %config.model,
        "openai client configured"
    );

    // 2. One client for the whole run, handed to the evaluator
    let evaluator = OpenAiEvaluator::from_config(config.openai, config.model)?;

    // 3. Evaluate everything in the input directory
    info!(
        input = %config.paths.input_dir.display(),
        output = %config.paths.output_dir.display(),
        criteria = %config.paths.criteria_file.display(),
        template = %config.paths.template_file.display(),
        "paths resolved"
    );
    driver::run(&config.paths, &evaluator, started)
        .await
        .inspect_err(|e| error!(error = %e, "evaluation run aborted"))?;

    Ok(())
}
