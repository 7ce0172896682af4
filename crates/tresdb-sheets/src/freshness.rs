use std::sync::LazyLock;

use regex::Regex;

/// `As of <date>.` as the sheet maintainers type it in the title block.
/// The capture stops at the first period and never crosses a line break.
static AS_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bas of\s+([^.\r\n]+)\.").expect("valid regex"));

/// Extracts the "as of" date text from a raw sheet, or `""` if absent.
///
/// The date is returned as written (e.g. `"August 31, 2025"`); it is a
/// human note, not a timestamp.
#[must_use]
pub fn extract_freshness_date(raw: &str) -> String {
    AS_OF
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_date_up_to_period() {
        let raw = "LIST OF ACCREDITED TREs As of August 31, 2025. Prepared by DOT";
        assert_eq!(extract_freshness_date(raw), "August 31, 2025");
    }

    #[test]
    fn missing_pattern_yields_empty_string() {
        assert_eq!(extract_freshness_date("No.,Enterprise Name\n1,Hotel,Almont\n"), "");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(extract_freshness_date("as of   July 1, 2025."), "July 1, 2025");
        assert_eq!(extract_freshness_date("AS OF JUNE 2025."), "JUNE 2025");
    }

    #[test]
    fn finds_note_inside_quoted_cell() {
        let raw = "\"ACCREDITED TOURISM ENTERPRISES\nAs of September 15, 2025.\",,,\n";
        assert_eq!(extract_freshness_date(raw), "September 15, 2025");
    }

    #[test]
    fn requires_terminating_period_on_same_line() {
        assert_eq!(extract_freshness_date("As of August 31, 2025\nnext line."), "");
    }

    #[test]
    fn first_occurrence_wins() {
        let raw = "As of May 1, 2025. later: As of June 1, 2025.";
        assert_eq!(extract_freshness_date(raw), "May 1, 2025");
    }

    #[test]
    fn does_not_match_inside_words() {
        assert_eq!(extract_freshness_date("Canvas of Siargao."), "");
    }
}
