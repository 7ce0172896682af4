//! Concurrent retrieval of several province sheets.

use futures::stream::{self, StreamExt};
use tresdb_core::{NormalizationResult, ProvinceDescriptor};

use crate::client::SheetClient;
use crate::normalize::normalize_all;
use crate::types::SheetPayload;

/// Fetches every province's sheet with at most `max_concurrent` requests in
/// flight, returning payloads in the same order as `provinces`.
///
/// A failed fetch becomes a [`SheetPayload`] carrying the diagnostic, so
/// one unreachable sheet never stops the others.
pub async fn fetch_provinces(
    client: &SheetClient,
    provinces: &[ProvinceDescriptor],
    max_concurrent: usize,
) -> Vec<SheetPayload> {
    stream::iter(provinces)
        .map(|province| async move {
            let raw = client
                .fetch(&province.source_location)
                .await
                .map_err(|e| {
                    tracing::warn!(
                        province = %province.id,
                        location = %province.source_location,
                        error = %e,
                        "failed to fetch province sheet"
                    );
                    format!("failed to fetch {}: {e}", province.display_name)
                });
            SheetPayload {
                province_id: Some(province.id.clone()),
                raw,
            }
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

/// Fetches and normalizes `provinces` into one combined result.
pub async fn fetch_and_normalize(
    client: &SheetClient,
    provinces: &[ProvinceDescriptor],
    max_concurrent: usize,
) -> NormalizationResult {
    let payloads = fetch_provinces(client, provinces, max_concurrent).await;
    let result = normalize_all(&payloads);
    tracing::debug!(
        provinces = provinces.len(),
        records = result.records.len(),
        failed = payloads.iter().filter(|p| p.raw.is_err()).count(),
        "fetched and normalized provinces"
    );
    result
}
