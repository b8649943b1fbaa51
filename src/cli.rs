//! Command-line interface for quantum_tictactoe.

use clap::Parser;
use quantum_tictactoe::{CollapsePolicy, CollapseTrigger, GameConfig};
use std::path::PathBuf;
use tracing::instrument;

/// Quantum Tic-Tac-Toe - marks stay tentative until the cell collapses
#[derive(Parser, Debug)]
#[command(name = "quantum_tictactoe")]
#[command(about = "Two-player quantum tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "quantum_tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for collapse sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// What happens to tentative marks after a cell collapses
    #[arg(long, value_enum)]
    pub collapse_policy: Option<CollapsePolicy>,

    /// When collapse passes run
    #[arg(long, value_enum)]
    pub collapse_trigger: Option<CollapseTrigger>,

    /// Pause after a finished round, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// File that receives log output
    #[arg(long, default_value = "quantum_tictactoe.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    #[instrument(skip(self))]
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(policy) = self.collapse_policy {
            config = config.with_collapse_policy(policy);
        }
        if let Some(trigger) = self.collapse_trigger {
            config = config.with_collapse_trigger(trigger);
        }
        if let Some(pause_ms) = self.pause_ms {
            config = config.with_round_pause_ms(pause_ms);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["quantum_tictactoe"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("quantum_tictactoe.toml"));
        assert_eq!(cli.apply(GameConfig::default()), GameConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "quantum_tictactoe",
            "--seed",
            "9",
            "--collapse-policy",
            "clear-after-collapse",
            "--collapse-trigger",
            "on-superposition",
            "--pause-ms",
            "0",
        ])
        .unwrap();

        let config = cli.apply(GameConfig::default());
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.collapse_policy(), CollapsePolicy::ClearAfterCollapse);
        assert_eq!(*config.collapse_trigger(), CollapseTrigger::OnSuperposition);
        assert_eq!(*config.round_pause_ms(), 0);
    }
}
