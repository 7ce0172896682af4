//! Command handlers for the CLI.
//!
//! Per-province fetch or parse failures are reported and skipped rather than
//! aborting the run; the command only fails when nothing could be loaded.

use std::path::{Path, PathBuf};

use tresdb_core::{AppConfig, NormalizationResult, ProvinceDescriptor, ProvinceRegistry};
use tresdb_sheets::{SheetClient, SheetPayload};

use crate::output;

/// The configured registry file if set, otherwise the built-in provinces.
pub(crate) fn load_registry(config: &AppConfig) -> anyhow::Result<ProvinceRegistry> {
    match &config.provinces_path {
        Some(path) => Ok(tresdb_core::load_provinces(path)?),
        None => Ok(ProvinceRegistry::builtin()),
    }
}

pub(crate) fn run_provinces(config: &AppConfig) -> anyhow::Result<()> {
    let registry = load_registry(config)?;
    for province in registry.list() {
        println!(
            "{:<16} {:<20} {}",
            province.id, province.display_name, province.source_location
        );
    }
    Ok(())
}

/// Select the provinces for a fetch run: one by id, or all in display order.
pub(crate) fn select_provinces(
    registry: &ProvinceRegistry,
    province: Option<&str>,
) -> anyhow::Result<Vec<ProvinceDescriptor>> {
    match province {
        Some(id) => Ok(vec![registry.resolve(id)?.clone()]),
        None => Ok(registry.list().to_vec()),
    }
}

pub(crate) async fn run_fetch(
    config: &AppConfig,
    province: Option<&str>,
    query: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let registry = load_registry(config)?;
    let provinces = select_provinces(&registry, province)?;

    let client = SheetClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build sheet client: {e}"))?;

    let result =
        tresdb_sheets::fetch_and_normalize(&client, &provinces, config.max_concurrent_sources)
            .await;

    report(&result, query, json)
}

pub(crate) async fn run_normalize(
    files: &[PathBuf],
    query: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut payloads = Vec::with_capacity(files.len());
    for file in files {
        payloads.push(read_payload(file).await);
    }

    let result = tresdb_sheets::normalize_all(&payloads);
    report(&result, query, json)
}

/// Reads one local sheet, using the file stem as the id prefix.
async fn read_payload(path: &Path) -> SheetPayload {
    let stem = path.file_stem().and_then(|s| s.to_str());
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => SheetPayload::text(stem, raw),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read sheet");
            SheetPayload::failed(stem, format!("failed to read {}: {e}", path.display()))
        }
    }
}

fn report(result: &NormalizationResult, query: Option<&str>, json: bool) -> anyhow::Result<()> {
    if let Some(error) = &result.error {
        if result.records.is_empty() {
            anyhow::bail!("{error}");
        }
        eprintln!("warning: {error}");
    }

    let filtered = output::filter_result(result, query.unwrap_or_default());
    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else {
        print!("{}", output::render_text(&filtered));
    }
    Ok(())
}
