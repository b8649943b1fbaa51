//! Tests for loading game configuration from disk.

use quantum_tictactoe::{CollapsePolicy, CollapseTrigger, GameConfig, Symbol};
use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_full_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
round_pause_ms = 500
collapse_policy = "clear-after-collapse"
collapse_trigger = "on-superposition"
first_symbol = "O"
seed = 1234
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config.round_pause(), Duration::from_millis(500));
    assert_eq!(*config.collapse_policy(), CollapsePolicy::ClearAfterCollapse);
    assert_eq!(*config.collapse_trigger(), CollapseTrigger::OnSuperposition);
    assert_eq!(*config.first_symbol(), Symbol::O);
    assert_eq!(*config.seed(), Some(1234));

    let session = config.session();
    assert_eq!(session.current_symbol(), Symbol::O);
    assert_eq!(session.rules().trigger, CollapseTrigger::OnSuperposition);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"collapse_policy = "sometimes""#).unwrap();

    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
