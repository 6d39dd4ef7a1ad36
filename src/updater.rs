use std::fs;
use std::path::Path;

use tokio::task::JoinSet;

use crate::api::UpstreamClient;
use crate::config::Config;
use crate::error::UpdateError;
use crate::store;
use crate::types::{DrawRecord, Lottery};
use crate::utils::normalize_draw;

pub const VIRADA_SLUG: &str = "mega-sena-da-virada";

/// Tally of one full daily run. `updated`, `unchanged` and `failed`
/// count the fetched games only; the derived datasets are tallied
/// separately.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub derived_updated: usize,
    pub derived_failed: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0 && self.derived_failed == 0
    }
}

/// Fetch and append any draws newer than what is stored for one lottery.
///
/// Returns the number of records appended. The file is rewritten only
/// when at least one new draw was fetched; a failed fetch mid-backfill
/// writes nothing, so the next run restarts from the same floor.
pub async fn update_lottery(
    client: &UpstreamClient,
    data_dir: &Path,
    lottery: Lottery,
) -> Result<usize, UpdateError> {
    let path = store::dataset_path(data_dir, lottery.slug());
    let stored = store::load_dataset(&path)?;
    store::check_invariants(&stored)?;
    let floor = stored.last().map(|r| r.concurso).unwrap_or(0);

    let latest = normalize_draw(lottery, &client.fetch_latest(lottery).await?)?;
    if latest.concurso <= floor {
        tracing::info!(
            lottery = lottery.slug(),
            stored = floor,
            upstream = latest.concurso,
            "no new draws"
        );
        return Ok(0);
    }

    let mut fresh = Vec::with_capacity((latest.concurso - floor) as usize);
    for concurso in (floor + 1)..latest.concurso {
        let record = normalize_draw(lottery, &client.fetch_draw(lottery, concurso).await?)?;
        if record.concurso != concurso {
            return Err(UpdateError::Consistency(format!(
                "asked upstream for concurso {concurso}, got {}",
                record.concurso
            )));
        }
        fresh.push(record);
    }
    fresh.push(latest);
    let appended = fresh.len();

    let mut updated = stored;
    updated.extend(fresh);
    store::check_invariants(&updated)?;

    store::write_atomic(&path, &store::render_dataset(&updated)?)?;
    tracing::info!(
        lottery = lottery.slug(),
        appended,
        total = updated.len(),
        "dataset updated"
    );
    Ok(appended)
}

/// Derive the Mega-Sena da Virada dataset: the Mega-Sena draws held on
/// December 31st. Reads the local mega-sena file, never the network, and
/// rewrites its own file only when the filtered content changed.
pub fn update_virada(data_dir: &Path) -> Result<usize, UpdateError> {
    let source = store::dataset_path(data_dir, Lottery::MegaSena.slug());
    if !source.exists() {
        tracing::warn!("mega-sena.json not found, skipping mega-sena-da-virada");
        return Ok(0);
    }

    let virada: Vec<DrawRecord> = store::load_dataset(&source)?
        .into_iter()
        .filter(|draw| draw.data.starts_with("31/12"))
        .collect();

    let path = store::dataset_path(data_dir, VIRADA_SLUG);
    let rendered = store::render_dataset(&virada)?;
    if fs::read_to_string(&path).is_ok_and(|existing| existing == rendered) {
        tracing::info!(lottery = VIRADA_SLUG, "no new draws");
        return Ok(0);
    }

    store::write_atomic(&path, &rendered)?;
    tracing::info!(lottery = VIRADA_SLUG, total = virada.len(), "dataset updated");
    Ok(virada.len())
}

/// Run the full daily pass: every fetched lottery as its own task, then
/// the derived Virada dataset once Mega-Sena has settled. One lottery's
/// failure never stops the others.
pub async fn run_all(config: &Config) -> Result<RunSummary, UpdateError> {
    let client = UpstreamClient::new(config)?;

    let mut tasks = JoinSet::new();
    for lottery in Lottery::ALL {
        let client = client.clone();
        let data_dir = config.data_dir.clone();
        tasks.spawn(async move { (lottery, update_lottery(&client, &data_dir, lottery).await) });
    }

    let mut summary = RunSummary::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(0))) => summary.unchanged += 1,
            Ok((_, Ok(_))) => summary.updated += 1,
            Ok((lottery, Err(e))) => {
                summary.failed += 1;
                tracing::error!(lottery = lottery.slug(), error = %e, "update failed");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::error!(error = %e, "update task panicked");
            }
        }
    }

    match update_virada(&config.data_dir) {
        Ok(0) => {}
        Ok(_) => summary.derived_updated += 1,
        Err(e) => {
            summary.derived_failed += 1;
            tracing::error!(lottery = VIRADA_SLUG, error = %e, "update failed");
        }
    }

    Ok(summary)
}
