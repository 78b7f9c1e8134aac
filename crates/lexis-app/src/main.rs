use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use lexis_config::Config;
use lexis_source::{EntrySource, HttpEntrySource};
use tokio::signal;

pub mod controller;
pub mod events;
pub mod logging;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Fill in pending dictionary definitions, one word at a time.
///
/// Edits live only for the duration of the session.
#[derive(Parser, Debug)]
#[command(name = "lexis", version)]
struct Cli {
    /// URL of the dictionary JSON document
    #[arg(long)]
    url: Option<String>,

    /// Pause before redrawing after a save, in milliseconds
    #[arg(long)]
    render_pause_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::new().with_overrides(cli.url, cli.render_pause_ms);
    logging::init_tracing(config.log_format);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to listen for ctrl+c: {e}");
                std::future::pending::<()>().await;
            }
        };
        run(config, shutdown).await
    });

    // stdin reads block a runtime thread; do not wait on them
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

pub async fn run(config: Config, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let source: Arc<dyn EntrySource> = Arc::new(HttpEntrySource::from_config(&config.source)?);
    let channel_capacity = config.ui.channel_capacity;

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks(source);

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e:#}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    Ok(())
}
