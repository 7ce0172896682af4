//! Text and JSON rendering of normalized listings.

use std::fmt::Write;

use tresdb_core::{filter_records, group_by_location, NormalizationResult};

const UNSPECIFIED_LOCATION: &str = "(location not specified)";

/// A copy of `result` holding only the records matching `query`.
pub(crate) fn filter_result(result: &NormalizationResult, query: &str) -> NormalizationResult {
    NormalizationResult {
        records: filter_records(&result.records, query)
            .into_iter()
            .cloned()
            .collect(),
        freshness_date: result.freshness_date.clone(),
        error: result.error.clone(),
    }
}

/// Renders records grouped under their location headings.
pub(crate) fn render_text(result: &NormalizationResult) -> String {
    let mut out = String::new();

    if !result.freshness_date.is_empty() {
        let _ = writeln!(out, "As of {}\n", result.freshness_date);
    }

    if result.records.is_empty() {
        out.push_str("No results found.\n");
        return out;
    }

    for group in group_by_location(&result.records) {
        let heading = if group.location.is_empty() {
            UNSPECIFIED_LOCATION
        } else {
            group.location
        };
        let _ = writeln!(out, "{heading}");

        for record in group.records {
            if record.enterprise_type.is_empty() {
                let _ = writeln!(out, "  {}", record.name);
            } else {
                let _ = writeln!(out, "  {} [{}]", record.name, record.enterprise_type);
            }
            if !record.address.is_empty() {
                let _ = writeln!(out, "    {}", record.address);
            }

            let mut contact = Vec::new();
            if !record.phone.is_empty() {
                contact.push(format!("Tel: {}", record.phone));
            }
            if let Some(email) = &record.email {
                contact.push(format!("Email: {email}"));
            }
            if !contact.is_empty() {
                let _ = writeln!(out, "    {}", contact.join(" | "));
            }

            let mut accreditation = Vec::new();
            if !record.accreditation_no.is_empty() {
                accreditation.push(format!("Accreditation: {}", record.accreditation_no));
            }
            if !record.validity.is_empty() {
                accreditation.push(format!("Valid until: {}", record.validity));
            }
            if !record.status.is_empty() {
                accreditation.push(record.status.clone());
            }
            if !accreditation.is_empty() {
                let _ = writeln!(out, "    {}", accreditation.join(" | "));
            }
        }
        out.push('\n');
    }

    out
}
