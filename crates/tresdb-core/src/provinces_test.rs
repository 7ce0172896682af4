use std::io::Write;
use std::path::Path;

use super::*;

const TWO_PROVINCES: &str = r"
provinces:
  - id: agusan-norte
    display_name: Agusan del Norte
    source_location: https://sheets.example.com/an.csv
  - id: dinagat
    display_name: Dinagat Islands
    source_location: dinagat.csv
";

#[test]
fn builtin_lists_provinces_in_display_order() {
    let ids: Vec<&str> = list_provinces().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "agusan-norte",
            "agusan-sur",
            "surigao-norte",
            "surigao-sur",
            "dinagat"
        ]
    );
}

#[test]
fn builtin_passes_validation() {
    assert!(validate_provinces(ProvinceRegistry::builtin().list()).is_ok());
}

#[test]
fn resolve_known_province() {
    let province = resolve_province("surigao-sur").unwrap();
    assert_eq!(province.display_name, "Surigao del Sur");
    assert_eq!(province.source_location, "surigao-sur.csv");
}

#[test]
fn resolve_unknown_province_is_not_found() {
    let err = resolve_province("metro-manila").unwrap_err();
    assert!(
        matches!(err, RegistryError::NotFound { ref id } if id == "metro-manila"),
        "expected NotFound, got: {err:?}"
    );
}

#[test]
fn resolve_is_case_sensitive() {
    assert!(resolve_province("Agusan-Norte").is_err());
}

#[test]
fn from_yaml_preserves_order() {
    let registry = ProvinceRegistry::from_yaml_str(TWO_PROVINCES).unwrap();
    let names: Vec<&str> = registry
        .list()
        .iter()
        .map(|p| p.display_name.as_str())
        .collect();
    assert_eq!(names, ["Agusan del Norte", "Dinagat Islands"]);
}

#[test]
fn from_yaml_rejects_duplicate_ids() {
    let yaml = r"
provinces:
  - id: dinagat
    display_name: Dinagat Islands
    source_location: a.csv
  - id: dinagat
    display_name: Dinagat Again
    source_location: b.csv
";
    let err = ProvinceRegistry::from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate province id"));
}

#[test]
fn from_yaml_rejects_non_slug_id() {
    let yaml = r"
provinces:
  - id: Agusan Norte
    display_name: Agusan del Norte
    source_location: a.csv
";
    let err = ProvinceRegistry::from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("lowercase slug"));
}

#[test]
fn from_yaml_rejects_empty_source_location() {
    let yaml = r#"
provinces:
  - id: dinagat
    display_name: Dinagat Islands
    source_location: "  "
"#;
    let err = ProvinceRegistry::from_yaml_str(yaml).unwrap_err();
    assert!(err.to_string().contains("empty source_location"));
}

#[test]
fn from_yaml_rejects_empty_list() {
    let err = ProvinceRegistry::from_yaml_str("provinces: []").unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
}

#[test]
fn from_yaml_reports_parse_errors() {
    let err = ProvinceRegistry::from_yaml_str("provinces: [{id: 1").unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
}

#[test]
fn load_provinces_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_PROVINCES.as_bytes()).unwrap();
    let registry = load_provinces(file.path()).unwrap();
    assert_eq!(registry.list().len(), 2);
    assert_eq!(
        registry.resolve("agusan-norte").unwrap().source_location,
        "https://sheets.example.com/an.csv"
    );
}

#[test]
fn load_provinces_missing_file_is_io_error() {
    let err = load_provinces(Path::new("/nonexistent/provinces.yaml")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}

#[test]
fn load_provinces_from_shipped_config() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("provinces.yaml");
    let registry = load_provinces(&path).unwrap();
    assert_eq!(registry.list(), ProvinceRegistry::builtin().list());
}
