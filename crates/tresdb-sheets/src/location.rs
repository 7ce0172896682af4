use std::path::{Path, PathBuf};

use crate::error::SheetError;

/// Where a province's sheet text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLocation {
    Remote(String),
    Local(PathBuf),
}

/// Resolves a registry `source_location` against the configured roots.
///
/// - An absolute `http://` or `https://` URL is used as-is.
/// - Otherwise, with a `base_url`, the location is joined onto it.
/// - Otherwise the location is a filesystem path, relative to `source_dir`
///   unless already absolute.
///
/// # Errors
///
/// Returns [`SheetError::InvalidLocation`] for an empty location or a URL
/// that does not parse.
pub fn resolve_location(
    location: &str,
    base_url: Option<&str>,
    source_dir: &Path,
) -> Result<SheetLocation, SheetError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(SheetError::InvalidLocation {
            location: location.to_owned(),
            reason: "location is empty".into(),
        });
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        let url = reqwest::Url::parse(location).map_err(|e| SheetError::InvalidLocation {
            location: location.to_owned(),
            reason: e.to_string(),
        })?;
        return Ok(SheetLocation::Remote(url.to_string()));
    }

    if let Some(base) = base_url {
        // `Url::join` replaces the last path segment unless the base ends in '/'.
        let base = if base.ends_with('/') {
            base.to_owned()
        } else {
            format!("{base}/")
        };
        let url = reqwest::Url::parse(&base)
            .and_then(|b| b.join(location.trim_start_matches('/')))
            .map_err(|e| SheetError::InvalidLocation {
                location: location.to_owned(),
                reason: format!("cannot join onto base URL {base}: {e}"),
            })?;
        return Ok(SheetLocation::Remote(url.to_string()));
    }

    let path = Path::new(location);
    if path.is_absolute() {
        Ok(SheetLocation::Local(path.to_path_buf()))
    } else {
        Ok(SheetLocation::Local(source_dir.join(path)))
    }
}
