//! Row heuristics for hand-maintained accreditation sheets.
//!
//! The provincial sheets share a nominal layout (`No.`, type, name, address,
//! contact, email, accreditation no., validity, status) but drift from it
//! row to row: the `No.` column is often missing, location headings sit in a
//! single cell, and trailing columns are frequently absent. These helpers
//! make the per-row decisions; [`crate::normalize`] threads state through them.

/// Number of logical columns in a fully-populated provider row.
pub const CANONICAL_WIDTH: usize = 9;

/// Rows discarded from the top of a sheet when no header row is found.
pub const FALLBACK_PREAMBLE_ROWS: usize = 4;

const HEADER_MARKER: &str = "enterprise name";

/// Field values of a provider row after column-shift correction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderFields {
    pub enterprise_type: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub accreditation_no: String,
    pub validity: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// A single-cell heading naming the city or municipality for the rows
    /// that follow.
    LocationMarker(String),
    Provider(ProviderFields),
}

/// Whether `row` is the column-title row (any cell mentions "Enterprise Name").
#[must_use]
pub fn is_header_row(row: &[String]) -> bool {
    row.iter()
        .any(|cell| cell.to_lowercase().contains(HEADER_MARKER))
}

/// Index of the first data row and whether a header row was found.
///
/// With a header, data starts right after it. Without one the sheet is
/// parsed in degraded mode: the first [`FALLBACK_PREAMBLE_ROWS`] rows are
/// treated as preamble.
#[must_use]
pub fn data_start(rows: &[Vec<String>]) -> (usize, bool) {
    match rows.iter().position(|row| is_header_row(row)) {
        Some(header) => (header + 1, true),
        None => (FALLBACK_PREAMBLE_ROWS, false),
    }
}

/// A pure non-negative integer, as found in the optional `No.` column.
#[must_use]
pub fn is_index_cell(cell: &str) -> bool {
    let cell = cell.trim();
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit())
}

/// Digits with optional `.`/`,` separators, e.g. `"12"`, `"3.5"`, `"1,200"`.
fn is_numeric_cell(cell: &str) -> bool {
    cell.bytes().any(|b| b.is_ascii_digit())
        && cell
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.' || b == b',')
}

/// Returns the heading text when `row` has exactly one non-blank cell and
/// that cell is not a number.
#[must_use]
pub fn location_marker(row: &[String]) -> Option<&str> {
    let mut filled = row.iter().map(|c| c.trim()).filter(|c| !c.is_empty());
    let only = filled.next()?;
    if filled.next().is_some() || is_numeric_cell(only) {
        return None;
    }
    Some(only)
}

/// Maps a provider row onto [`ProviderFields`], padding missing trailing
/// columns with empty strings.
///
/// When the first cell is an integer it is the `No.` column and fields start
/// at column 1; otherwise the row is assumed to omit `No.` and fields start
/// at column 0. This is a best-effort call: a row without `No.` whose type
/// cell happens to be a bare integer is read as if it had one.
#[must_use]
pub fn extract_fields(row: &[String]) -> ProviderFields {
    let offset = usize::from(row.first().is_some_and(|c| is_index_cell(c)));
    let cell = |column: usize| -> String {
        row.get(offset + column)
            .map(|c| c.trim().to_owned())
            .unwrap_or_default()
    };

    ProviderFields {
        enterprise_type: cell(0),
        name: cell(1),
        address: cell(2),
        phone: cell(3),
        email: cell(4),
        accreditation_no: cell(5),
        validity: cell(6),
        status: cell(7),
    }
}

#[must_use]
pub fn classify_row(row: &[String]) -> RowKind {
    match location_marker(row) {
        Some(location) => RowKind::LocationMarker(location.to_owned()),
        None => RowKind::Provider(extract_fields(row)),
    }
}
