use spindle::config::{Config, ConfigError};

#[test]
fn default_values_match_the_engine_constants() {
    let config = Config::default();
    assert_eq!(config.carousel.auto_advance_ms, 5000);
    assert_eq!(config.carousel.resize_debounce_ms, 200);
    assert_eq!(config.carousel.drag_threshold_px, 80);
    assert_eq!(config.terminal.cell_width_px, 8);
    assert_eq!(config.terminal.card_gap_cells, 2);
}

#[test]
fn default_config_carries_a_valid_sample_set() {
    let config = Config::default();
    assert_eq!(config.reviews.len(), 7);
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("spindle/config.toml"));
}

#[test]
fn parse_valid_toml() {
    let toml_content = r#"
[carousel]
auto_advance_ms = 8000

[[reviews]]
author = "Ada"
rating = 5
text = "Wonderful stay."

[[reviews]]
author = "Brahm"
rating = 3
text = "Decent, a bit noisy."
date = "2025-03-01"
"#;

    let config: Config = toml::from_str(toml_content).expect("Should parse valid TOML");
    assert_eq!(config.carousel.auto_advance_ms, 8000);
    // Unspecified knobs fall back to defaults.
    assert_eq!(config.carousel.resize_debounce_ms, 200);
    assert_eq!(config.reviews.len(), 2);
    assert_eq!(config.reviews[1].date.as_deref(), Some("2025-03-01"));
}

#[test]
fn parse_invalid_toml() {
    let invalid_toml = "this is not valid toml [[[";
    let result: Result<Config, _> = toml::from_str(invalid_toml);
    assert!(result.is_err());
}

#[test]
fn validation_rejects_out_of_range_rating() {
    let mut config = Config::default();
    config.reviews[0].rating = 6;

    let result = config.validate();
    match result.unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains(&config.reviews[0].author));
            assert!(message.contains("rating 6"));
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn validation_rejects_zero_rating() {
    let mut config = Config::default();
    config.reviews[0].rating = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_auto_advance() {
    let mut config = Config::default();
    config.carousel.auto_advance_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_non_positive_drag_threshold() {
    let mut config = Config::default();
    config.carousel.drag_threshold_px = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_zero_cell_width() {
    let mut config = Config::default();
    config.terminal.cell_width_px = 0;
    assert!(config.validate().is_err());
}

#[test]
fn empty_review_list_is_allowed() {
    let mut config = Config::default();
    config.reviews.clear();
    assert!(config.validate().is_ok());
}

#[test]
fn config_roundtrip() {
    let original = Config::default();
    let serialized = toml::to_string(&original).expect("Should serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("Should deserialize");

    assert_eq!(
        original.carousel.auto_advance_ms,
        deserialized.carousel.auto_advance_ms
    );
    assert_eq!(original.reviews.len(), deserialized.reviews.len());
    assert_eq!(original.reviews[0].author, deserialized.reviews[0].author);
}

#[test]
fn load_from_reads_and_validates_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[terminal]
cell_width_px = 10

[[reviews]]
author = "Ada"
rating = 4
text = "Great pool."
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).expect("should load");
    assert_eq!(config.terminal.cell_width_px, 10);
    assert_eq!(config.reviews.len(), 1);
}

#[test]
fn load_from_rejects_invalid_ratings_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[reviews]]
author = "Ada"
rating = 9
text = "Too many stars."
"#,
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err().to_string();
    assert!(err.contains("rating 9"), "got: {err}");
}

#[test]
fn load_from_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}
