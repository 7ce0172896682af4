/// Raw text for one province sheet, or the diagnostic from a failed fetch,
/// as handed to [`crate::normalize_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPayload {
    /// Prefixes record ids when present.
    pub province_id: Option<String>,
    pub raw: Result<String, String>,
}

impl SheetPayload {
    #[must_use]
    pub fn text(province_id: Option<&str>, raw: impl Into<String>) -> Self {
        Self {
            province_id: province_id.map(str::to_owned),
            raw: Ok(raw.into()),
        }
    }

    #[must_use]
    pub fn failed(province_id: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            province_id: province_id.map(str::to_owned),
            raw: Err(message.into()),
        }
    }
}
