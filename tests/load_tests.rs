//! Startup loading tests: dataset, locale dictionaries and config files.

use std::fs;

use tempfile::TempDir;

use feriado::config::Config;
use feriado::dataset::Dataset;
use feriado::error::ErrorKind;
use feriado::i18n::Catalog;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn dataset_loads_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "holidays.json",
        r#"{ "countries": { "colombia": { "name": "Colombia", "holidays": [
            { "date": "08-07", "articleId": "battle_boyaca", "seoSlug": "batalla-de-boyaca" }
        ] } } }"#,
    );
    let dataset = Dataset::from_path(&path).unwrap();
    assert_eq!(dataset.holidays("colombia").len(), 1);
}

#[test]
fn missing_dataset_file_is_a_data_load_failure() {
    let dir = TempDir::new().unwrap();
    let err = Dataset::from_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DataLoad));
}

#[test]
fn malformed_dataset_is_a_data_load_failure() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "holidays.json", "{ not json");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DataLoad));
}

#[test]
fn catalog_loads_active_and_fallback_dictionaries() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "locales/es.json",
        r#"{ "translation": { "months": { "7": "agosto" } } }"#,
    );
    write_file(
        &dir,
        "locales/en.json",
        r#"{ "translation": { "months": { "7": "august" }, "backToCalendar": "Back" } }"#,
    );
    let catalog = Catalog::load(&dir.path().join("locales"), "es", "en").unwrap();
    assert_eq!(catalog.month_name(7), "agosto");
    // Key only present in the fallback dictionary.
    assert_eq!(catalog.t("translation.backToCalendar"), "Back");
}

#[test]
fn missing_locale_file_is_a_data_load_failure() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "locales/es.json", r#"{ "translation": {} }"#);
    let err = Catalog::load(&dir.path().join("locales"), "es", "en").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DataLoad));
}

#[test]
fn single_dictionary_suffices_when_fallback_equals_active() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "locales/en.json",
        r#"{ "translation": { "months": { "0": "january" } } }"#,
    );
    let catalog = Catalog::load(&dir.path().join("locales"), "en", "en").unwrap();
    assert_eq!(catalog.month_name(0), "january");
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "config.toml",
        "language = \"en\"\ncountry = \"usa\"\ndata_dir = \"/srv/feriado\"\n",
    );
    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.language, "en");
    assert_eq!(config.country, "usa");
    assert_eq!(config.fallback_language, "en");
    assert_eq!(
        config.holidays_file(),
        std::path::PathBuf::from("/srv/feriado/holidays.json")
    );
}

#[test]
fn broken_config_is_a_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "config.toml", "language = [not toml");
    let err = Config::from_path(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ConfigParse));
}
