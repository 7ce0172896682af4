//! Source registry: the ordered list of provinces and where each one's
//! accredited-establishment sheet lives.
//!
//! The built-in registry covers the Caraga region. A deployment can replace
//! it with a YAML file (see [`load_provinces`]); either way the registry is
//! built once and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// One province tab in the listing, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceDescriptor {
    /// URL-safe slug, e.g. `"agusan-norte"`.
    pub id: String,
    pub display_name: String,
    /// Absolute URL or a path relative to the configured source root.
    pub source_location: String,
}

impl ProvinceDescriptor {
    fn new(id: &str, display_name: &str, source_location: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            source_location: source_location.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProvincesFile {
    provinces: Vec<ProvinceDescriptor>,
}

/// Immutable, ordered set of provinces.
#[derive(Debug, Clone)]
pub struct ProvinceRegistry {
    provinces: Vec<ProvinceDescriptor>,
}

static BUILTIN: LazyLock<ProvinceRegistry> = LazyLock::new(ProvinceRegistry::builtin);

impl ProvinceRegistry {
    /// The Caraga provinces shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            provinces: vec![
                ProvinceDescriptor::new("agusan-norte", "Agusan del Norte", "agusan-norte.csv"),
                ProvinceDescriptor::new("agusan-sur", "Agusan del Sur", "agusan-sur.csv"),
                ProvinceDescriptor::new(
                    "surigao-norte",
                    "Surigao del Norte",
                    "surigao-norte.csv",
                ),
                ProvinceDescriptor::new("surigao-sur", "Surigao del Sur", "surigao-sur.csv"),
                ProvinceDescriptor::new("dinagat", "Dinagat Islands", "dinagat.csv"),
            ],
        }
    }

    /// Parses and validates a registry from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed YAML and
    /// [`RegistryError::Validation`] when the entries break registry rules.
    pub fn from_yaml_str(content: &str) -> Result<Self, RegistryError> {
        let file: ProvincesFile = serde_yaml::from_str(content)?;
        validate_provinces(&file.provinces)?;
        Ok(Self {
            provinces: file.provinces,
        })
    }

    #[must_use]
    pub fn list(&self) -> &[ProvinceDescriptor] {
        &self.provinces
    }

    /// Looks up a province by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when `id` is not registered.
    pub fn resolve(&self, id: &str) -> Result<&ProvinceDescriptor, RegistryError> {
        self.provinces
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }
}

/// Lists the built-in provinces in display order.
#[must_use]
pub fn list_provinces() -> &'static [ProvinceDescriptor] {
    BUILTIN.list()
}

/// Resolves a built-in province by id.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] when `id` is not a built-in province.
pub fn resolve_province(id: &str) -> Result<&'static ProvinceDescriptor, RegistryError> {
    BUILTIN.resolve(id)
}

/// Load and validate a province registry from a YAML file.
///
/// # Errors
///
/// Returns `RegistryError` if the file cannot be read, parsed, or fails validation.
pub fn load_provinces(path: &Path) -> Result<ProvinceRegistry, RegistryError> {
    let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let registry = ProvinceRegistry::from_yaml_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        provinces = registry.list().len(),
        "loaded province registry"
    );
    Ok(registry)
}

fn is_slug(id: &str) -> bool {
    !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn validate_provinces(provinces: &[ProvinceDescriptor]) -> Result<(), RegistryError> {
    if provinces.is_empty() {
        return Err(RegistryError::Validation(
            "at least one province is required".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for province in provinces {
        if province.id.trim().is_empty() {
            return Err(RegistryError::Validation(
                "province id must be non-empty".to_string(),
            ));
        }

        if !is_slug(&province.id) {
            return Err(RegistryError::Validation(format!(
                "province id '{}' must be a lowercase slug",
                province.id
            )));
        }

        if province.display_name.trim().is_empty() {
            return Err(RegistryError::Validation(format!(
                "province '{}' has an empty display_name",
                province.id
            )));
        }

        if province.source_location.trim().is_empty() {
            return Err(RegistryError::Validation(format!(
                "province '{}' has an empty source_location",
                province.id
            )));
        }

        if !seen_ids.insert(province.id.as_str()) {
            return Err(RegistryError::Validation(format!(
                "duplicate province id: '{}'",
                province.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "provinces_test.rs"]
mod tests;
