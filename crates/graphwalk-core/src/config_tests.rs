//! Tests for GraphConfig loading.

use crate::config::{GraphConfig, DEFAULT_MAX_TIED_PATHS};

#[test]
fn test_default_config() {
    let config = GraphConfig::default();
    assert_eq!(config.max_tied_paths, DEFAULT_MAX_TIED_PATHS);
    assert_eq!(config.initial_capacity, 0);
    assert_eq!(config.tied_path_limit(), Some(DEFAULT_MAX_TIED_PATHS));
}

#[test]
fn test_from_toml_overrides_defaults() {
    let config = GraphConfig::from_toml_str(
        r"
        max_tied_paths = 3
        initial_capacity = 128
        ",
    )
    .unwrap();
    assert_eq!(config.max_tied_paths, 3);
    assert_eq!(config.initial_capacity, 128);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = GraphConfig::from_toml_str("initial_capacity = 16").unwrap();
    assert_eq!(config.max_tied_paths, DEFAULT_MAX_TIED_PATHS);
    assert_eq!(config.initial_capacity, 16);
}

#[test]
fn test_zero_limit_disables_cap() {
    let config = GraphConfig::default().with_max_tied_paths(0);
    assert_eq!(config.tied_path_limit(), None);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = GraphConfig::from_toml_str("max_tied_paths = \"lots\"").unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = GraphConfig::load(None).unwrap();
    let defaults = GraphConfig::default();
    assert_eq!(config.initial_capacity, defaults.initial_capacity);
}
