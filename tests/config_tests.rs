use budget_bee::{
    config::{Config, ConfigManager},
    errors::LedgerError,
    ledger::{Taxonomy, TaxonomyCategory},
};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let manager = ConfigManager::at(dir.path().join("absent.json"));
    let config = manager.load().unwrap();
    assert_eq!(config.currency, "USD");
    assert_eq!(config.monthly_budget, 0.0);
    assert_eq!(config.taxonomy, Taxonomy::survey_default());
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let manager = ConfigManager::at(&path);

    let config = Config {
        currency: "EUR".into(),
        monthly_budget: 1_250.0,
        taxonomy: Taxonomy::new(vec![TaxonomyCategory::new("Pets", ["Food", "Vet"])]).unwrap(),
        load_sample_feed: false,
    };
    manager.save(&config).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.monthly_budget, 1_250.0);
    assert_eq!(loaded.taxonomy, config.taxonomy);
    assert!(!loaded.load_sample_feed);
}

#[test]
fn invalid_taxonomy_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"taxonomy": [{"name": "Food", "items": ["A"]}, {"name": "Food", "items": ["B"]}]}"#,
    )
    .unwrap();
    let err = ConfigManager::at(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::Serde(_)));
}

#[test]
fn blank_currency_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"currency": "  "}"#).unwrap();
    let err = ConfigManager::at(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::Config(_)));
}
