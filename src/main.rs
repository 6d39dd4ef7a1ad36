use anyhow::Result;
use tracing_subscriber::EnvFilter;

use loterias::{config, updater};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = config::load()?;
    tracing::info!(data_dir = %config.data_dir.display(), "starting loterias update run");

    let summary = updater::run_all(&config).await?;
    tracing::info!(
        updated = summary.updated,
        unchanged = summary.unchanged,
        failed = summary.failed,
        derived_updated = summary.derived_updated,
        derived_failed = summary.derived_failed,
        "update run complete"
    );

    if !summary.all_succeeded() {
        std::process::exit(1);
    }
    Ok(())
}
