//! Normalization from raw provincial sheet text to [`ProviderRecord`]s.
//!
//! Row-level decisions live in [`crate::classify`]; this module walks the
//! rows of one sheet, carrying the current location heading forward, and
//! stitches multiple sheets into one [`NormalizationResult`].

use tresdb_core::{NormalizationResult, ProviderRecord};

use crate::classify::{classify_row, data_start, ProviderFields, RowKind};
use crate::freshness::extract_freshness_date;
use crate::tokenize::tokenize;
use crate::types::SheetPayload;

/// Running state for one sheet's row walk.
#[derive(Default)]
struct RowWalk {
    location: String,
    records: Vec<ProviderRecord>,
}

/// Normalizes one sheet's raw text.
///
/// Never fails: an unparseable sheet yields no records and a diagnostic in
/// [`NormalizationResult::error`]. `province` prefixes generated ids so they
/// stay unique when sheets are combined.
#[must_use]
pub fn normalize(raw: &str, province: Option<&str>) -> NormalizationResult {
    let freshness_date = extract_freshness_date(raw);
    let label = province.unwrap_or("sheet");

    let rows = match tokenize(raw) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(province = label, error = %e, "malformed sheet; skipping");
            return NormalizationResult {
                records: Vec::new(),
                freshness_date,
                error: Some(format!("malformed sheet for {label}: {e}")),
            };
        }
    };

    let (start, header_found) = data_start(&rows);
    if !header_found {
        tracing::debug!(
            province = label,
            rows = rows.len(),
            skipped = start,
            "no header row found; using fixed preamble"
        );
    }

    let walk = rows
        .iter()
        .enumerate()
        .skip(start)
        .fold(RowWalk::default(), |mut walk, (index, row)| {
            match classify_row(row) {
                RowKind::LocationMarker(location) => walk.location = location,
                RowKind::Provider(fields) => {
                    if let Some(record) = build_record(fields, index, &walk.location, province) {
                        walk.records.push(record);
                    }
                }
            }
            walk
        });

    tracing::debug!(
        province = label,
        rows = rows.len(),
        records = walk.records.len(),
        "normalized sheet"
    );

    NormalizationResult {
        records: walk.records,
        freshness_date,
        error: None,
    }
}

/// Normalizes several sheets in order and concatenates their records.
///
/// The freshness date comes from the first payload only. A failed payload
/// or a malformed sheet contributes no records; its diagnostic is joined
/// into [`NormalizationResult::error`] and the remaining sheets still count.
#[must_use]
pub fn normalize_all(payloads: &[SheetPayload]) -> NormalizationResult {
    let mut combined = NormalizationResult::default();
    let mut errors: Vec<String> = Vec::new();

    for (position, payload) in payloads.iter().enumerate() {
        let result = match &payload.raw {
            Ok(raw) => normalize(raw, payload.province_id.as_deref()),
            Err(message) => NormalizationResult::failed(message.clone()),
        };

        if position == 0 {
            combined.freshness_date = result.freshness_date;
        }
        combined.records.extend(result.records);
        errors.extend(result.error);
    }

    if !errors.is_empty() {
        combined.error = Some(errors.join("; "));
    }

    combined
}

fn build_record(
    fields: ProviderFields,
    index: usize,
    current_location: &str,
    province: Option<&str>,
) -> Option<ProviderRecord> {
    if fields.name.is_empty() {
        return None;
    }

    let location = if current_location.is_empty() {
        location_from_address(&fields.address)
    } else {
        current_location.to_owned()
    };

    Some(ProviderRecord {
        id: provider_id(province, index, &fields.name),
        location,
        enterprise_type: fields.enterprise_type,
        name: fields.name,
        address: fields.address,
        phone: fields.phone,
        email: Some(fields.email).filter(|e| !e.is_empty()),
        accreditation_no: fields.accreditation_no,
        validity: fields.validity,
        status: fields.status,
    })
}

/// Last non-empty comma-separated segment of an address, e.g.
/// `"123 Main St, Butuan City"` gives `"Butuan City"`.
fn location_from_address(address: &str) -> String {
    address
        .rsplit(',')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_owned()
}

/// `provider-[{province}-]{index}-{name-slug}`, where `index` is the
/// post-filter row position within the sheet.
fn provider_id(province: Option<&str>, index: usize, name: &str) -> String {
    let mut id = String::from("provider");
    if let Some(province) = province.map(slugify).filter(|p| !p.is_empty()) {
        id.push('-');
        id.push_str(&province);
    }
    id.push('-');
    id.push_str(&index.to_string());

    let slug = slugify(name);
    if !slug.is_empty() {
        id.push('-');
        id.push_str(&slug);
    }
    id
}

/// Lowercases and collapses every run of non-alphanumeric ASCII into one
/// hyphen, trimming hyphens at either end.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
