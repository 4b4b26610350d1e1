// familyfriendly-core/tests/config_integration_tests.rs
use anyhow::Result;

use familyfriendly_core::config::{FilterConfig, DEFAULT_MASK_CHAR, DEFAULT_REPLACEMENT};
use familyfriendly_core::{Filter, FilterError, Language, Registry};
use test_log::test; // For integrating with `env_logger` in tests

#[test]
fn test_empty_yaml_is_default() -> Result<()> {
    let config = FilterConfig::from_yaml_str("")?;
    assert_eq!(config, FilterConfig::default());
    assert_eq!(config.mask_char, DEFAULT_MASK_CHAR);
    assert_eq!(config.replacement, DEFAULT_REPLACEMENT);
    assert_eq!(config.selected_languages(), Language::ALL.to_vec());
    Ok(())
}

#[test]
fn test_partial_yaml_keeps_defaults() -> Result<()> {
    let yaml = r#"
include_french: true
include_german: true
extra_words:
  - frobnicate
min_stub_length: 4
"#;
    let config = FilterConfig::from_yaml_str(yaml)?;
    assert_eq!(
        config.selected_languages(),
        vec![Language::French, Language::German]
    );
    assert_eq!(config.extra_words, vec!["frobnicate".to_string()]);
    assert_eq!(config.min_stub_length, 4);
    assert_eq!(config.mask_char, "*");
    Ok(())
}

#[test]
fn test_yaml_with_unknown_type_is_rejected() {
    let result = FilterConfig::from_yaml_str("include_english: [not, a, bool]");
    assert!(result.is_err());
}

#[test]
fn test_yaml_with_empty_replacement_is_rejected() {
    let err = FilterConfig::from_yaml_str("replacement: \"\"").unwrap_err();
    let root = err.root_cause().to_string();
    assert!(root.contains("replacement"), "{}", root);
    assert!(err.chain().any(|e| matches!(
        e.downcast_ref::<FilterError>(),
        Some(FilterError::InvalidConfig(_))
    )));
}

#[test]
fn test_config_round_trips_through_yaml() -> Result<()> {
    let mut config = FilterConfig::only(&[Language::Italian]);
    config.excluded_words = vec!["troia".to_string()];
    config.replacement = "[bleep]".to_string();
    let yaml = serde_yml::to_string(&config)?;
    assert_eq!(FilterConfig::from_yaml_str(&yaml)?, config);
    Ok(())
}

#[test]
fn test_excluded_words_are_not_matched() {
    let registry = Registry::new().with_language(Language::English, ["badword1", "badword2"]);
    let config = FilterConfig {
        excluded_words: vec!["badword2".to_string()],
        ..FilterConfig::default()
    };
    let filter = Filter::with_registry(Some(config), &registry);
    assert!(filter.contains_bad_word("badword1"));
    assert!(!filter.contains_bad_word("badword2"));
    assert_eq!(filter.mask_bad_words("badword2"), "badword2");
}

#[test]
fn test_filter_from_yaml_uses_embedded_dictionaries() -> Result<()> {
    let filter = Filter::from_yaml_str("include_spanish: true\nreplacement: \"[oops]\"")?;
    assert_eq!(filter.config().selected_languages(), vec![Language::Spanish]);
    assert_eq!(filter.replace_bad_words("qué mierda"), "qué [oops]");
    assert!(!filter.contains_bad_word("shit"));
    Ok(())
}
