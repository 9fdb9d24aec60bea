//! Agent binary.
//!
//! Composition root that assembles:
//! 1. File-backed world and agent providers (game-content)
//! 2. The objective selector and dependency resolver (strategy)
//! 3. A fixed-interval tick loop
//!
//! # Examples
//!
//! ```bash
//! AGENT_TICKS=5 AGENT_REPORT_JSON=true cargo run -p agent-client
//! ```

use anyhow::{Context, Result};
use agent_client::{AgentConfig, AgentRunner, logging};
use game_content::{ConfigLoader, ContentFactory, FileAgentProvider, FileWorldProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = AgentConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting agent");
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Agent state: {}", config.state_path().display());

    let game_config = match &config.config_file {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ContentFactory::new(&config.data_dir).load_config()?,
    };

    let mut runner = AgentRunner::new(
        FileWorldProvider::new(&config.data_dir),
        FileAgentProvider::new(config.state_path()),
        game_config,
    );

    let mut interval = tokio::time::interval(config.tick_interval);
    for _ in 0..config.ticks {
        interval.tick().await;

        match runner.tick() {
            Ok(report) => {
                if config.report_json {
                    println!("{}", serde_json::to_string(&report)?);
                }
            }
            Err(err) if err.is_terminal() => {
                tracing::error!(code = err.error_code(), "halting: {err}");
                return Err(err.into());
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "tick skipped: {err}");
            }
        }
    }

    tracing::info!(
        selections = runner.selector().history().len(),
        "Agent shutdown complete"
    );
    Ok(())
}
