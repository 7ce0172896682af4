use serde::{Deserialize, Serialize};

/// One accredited establishment, normalized from a provincial sheet row.
///
/// Serializes with camelCase keys (`enterpriseType`, `accreditationNo`) so the
/// listing UI can consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    /// Stable across re-parses of unchanged input, e.g.
    /// `"provider-agusan-norte-7-joe-s-diner"`.
    pub id: String,
    /// Heading the row was listed under (usually a city or municipality).
    /// Empty when neither a marker row nor the address resolved one.
    pub location: String,
    pub enterprise_type: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub accreditation_no: String,
    /// Free text as entered in the sheet; not parsed as a date.
    pub validity: String,
    pub status: String,
}

/// Output of one normalization call over one or more sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub records: Vec<ProviderRecord>,
    /// Text captured from an `As of <date>.` note; empty when absent.
    pub freshness_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NormalizationResult {
    /// An empty result carrying a diagnostic message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            freshness_date: String::new(),
            error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
