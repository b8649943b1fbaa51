//! Shared helpers for integration tests.

use quantum_tictactoe::{CandidatePicker, CollapseRules, GameSession};

/// Picker that replays a fixed list of choices, then repeats the last.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    choices: Vec<usize>,
    next: usize,
    /// Candidate counts the picker was asked about, in order.
    pub asked: Vec<usize>,
}

impl ScriptedPicker {
    pub fn new(choices: &[usize]) -> Self {
        Self {
            choices: choices.to_vec(),
            next: 0,
            asked: Vec::new(),
        }
    }
}

impl CandidatePicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.asked.push(len);
        let choice = self
            .choices
            .get(self.next)
            .or(self.choices.last())
            .copied()
            .unwrap_or(0);
        self.next += 1;
        assert!(choice < len, "scripted choice {choice} out of range for {len}");
        choice
    }
}

/// Session with default collapse rules and a scripted picker.
#[allow(dead_code)]
pub fn scripted_session(choices: &[usize]) -> GameSession<ScriptedPicker> {
    GameSession::new(ScriptedPicker::new(choices), CollapseRules::default())
}
