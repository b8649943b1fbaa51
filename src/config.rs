//! Game configuration loaded from TOML.

use crate::games::quantum::{
    CollapsePolicy, CollapseRules, CollapseTrigger, GameSession, RngPicker, Symbol,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Pause after a round ends before the board resets, in milliseconds.
    #[serde(default = "default_round_pause_ms")]
    round_pause_ms: u64,

    /// What happens to tentative marks after a cell collapses.
    #[serde(default)]
    collapse_policy: CollapsePolicy,

    /// When collapse passes run.
    #[serde(default)]
    collapse_trigger: CollapseTrigger,

    /// Symbol that moves first.
    #[serde(default = "default_first_symbol")]
    first_symbol: Symbol,

    /// Seed for collapse sampling; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_round_pause_ms() -> u64 {
    2000
}

#[instrument]
fn default_first_symbol() -> Symbol {
    Symbol::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_pause_ms: default_round_pause_ms(),
            collapse_policy: CollapsePolicy::default(),
            collapse_trigger: CollapseTrigger::default(),
            first_symbol: default_first_symbol(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            policy = %config.collapse_policy,
            trigger = %config.collapse_trigger,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, or the defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Round pause as a duration.
    pub fn round_pause(&self) -> Duration {
        Duration::from_millis(self.round_pause_ms)
    }

    /// Collapse settings for a session.
    pub fn collapse_rules(&self) -> CollapseRules {
        CollapseRules::new(self.collapse_policy, self.collapse_trigger)
    }

    /// Creates a session with a generator seeded from this configuration.
    #[instrument(skip(self))]
    pub fn session(&self) -> GameSession<RngPicker<StdRng>> {
        GameSession::new(RngPicker::seeded(self.seed), self.collapse_rules())
            .with_first_symbol(self.first_symbol)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.round_pause(), Duration::from_millis(2000));
        assert_eq!(*config.collapse_policy(), CollapsePolicy::Accumulate);
        assert_eq!(*config.collapse_trigger(), CollapseTrigger::EveryMove);
        assert_eq!(*config.first_symbol(), Symbol::X);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            collapse_policy = "clear-after-collapse"
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(*config.collapse_policy(), CollapsePolicy::ClearAfterCollapse);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.round_pause_ms(), 2000);
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_collapse_trigger(CollapseTrigger::OnSuperposition)
            .with_first_symbol(Symbol::O);
        assert_eq!(config.collapse_rules().trigger, CollapseTrigger::OnSuperposition);
        assert_eq!(config.session().current_symbol(), Symbol::O);
    }
}
