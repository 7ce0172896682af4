//! Splits raw sheet exports into rows of cells.
//!
//! Quoting follows RFC 4180 as the spreadsheet exporters emit it: a cell
//! that starts with `"` may contain commas, line breaks, and `""` escapes.
//! A quote anywhere else in a cell is literal text.

use crate::error::SheetError;

/// Tokenizes `raw` into rows, discarding rows where every cell is blank.
///
/// Row positions in the returned vector are the post-filter indexes used for
/// record ids, so blank separator rows never shift them.
///
/// # Errors
///
/// Returns [`SheetError::UnterminatedQuote`] when a quoted cell is never
/// closed, and [`SheetError::Csv`] if the reader rejects the input.
pub fn tokenize(raw: &str) -> Result<Vec<Vec<String>>, SheetError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    if let Some(line) = find_unterminated_quote(text) {
        return Err(SheetError::UnterminatedQuote { line });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(rows)
}

/// Returns the 1-based line on which an unclosed quoted cell opens.
///
/// The CSV reader silently swallows everything after an unclosed quote into
/// one cell, so this scan runs first to reject such input outright.
pub(crate) fn find_unterminated_quote(text: &str) -> Option<usize> {
    let mut chars = text.chars().peekable();
    let mut line = 1usize;
    let mut at_field_start = true;
    let mut open_line: Option<usize> = None;

    while let Some(ch) = chars.next() {
        if open_line.is_some() {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => open_line = None,
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if at_field_start => {
                open_line = Some(line);
                at_field_start = false;
            }
            ',' | '\r' => at_field_start = true,
            '\n' => {
                line += 1;
                at_field_start = true;
            }
            _ => at_field_start = false,
        }
    }

    open_line
}
