//! Application state and logic.

use std::ops::ControlFlow;

use quantum_tictactoe::{CandidatePicker, GameSession, InputEvent, MoveOutcome};
use tracing::{debug, info};

use super::input::BoardGeometry;

/// Main application state.
pub struct App<P> {
    session: GameSession<P>,
    geometry: BoardGeometry,
}

impl<P: CandidatePicker> App<P> {
    /// Creates a new application around `session`.
    pub fn new(session: GameSession<P>) -> Self {
        Self {
            session,
            geometry: BoardGeometry::default(),
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession<P> {
        &self.session
    }

    /// Where the grid was last drawn.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Records where the grid was drawn.
    pub fn set_geometry(&mut self, geometry: BoardGeometry) {
        self.geometry = geometry;
    }

    /// Handles one input event; breaks when the loop should stop.
    pub fn handle_input(&mut self, event: InputEvent) -> ControlFlow<()> {
        match event {
            InputEvent::Quit => {
                info!("Quit requested");
                return ControlFlow::Break(());
            }
            InputEvent::Move(pos) => match self.session.apply_move(pos) {
                MoveOutcome::Ignored => {}
                MoveOutcome::Placed { action, collapsed } => {
                    debug!(%action, collapsed, "Move applied");
                }
                MoveOutcome::RoundOver { action, status } => {
                    info!(%action, %status, "Round finished");
                }
            },
            InputEvent::PointerHover(pos) => self.session.set_hovered(Some(pos)),
            InputEvent::PointerLeave => self.session.set_hovered(None),
        }
        ControlFlow::Continue(())
    }

    /// Starts the next round after a finished one has been displayed.
    pub fn acknowledge_reset(&mut self) {
        if self.session.acknowledge_reset() {
            debug!("Board reset for a new round");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_tictactoe::{CollapseRules, Phase, Position, RngPicker};

    fn app() -> App<RngPicker<rand::rngs::StdRng>> {
        App::new(GameSession::new(
            RngPicker::seeded(Some(11)),
            CollapseRules::default(),
        ))
    }

    #[test]
    fn test_quit_breaks() {
        let mut app = app();
        assert!(app.handle_input(InputEvent::Quit).is_break());
    }

    #[test]
    fn test_hover_and_leave() {
        let mut app = app();
        assert!(app.handle_input(InputEvent::PointerHover(Position::Center)).is_continue());
        assert_eq!(app.session().hovered(), Some(Position::Center));
        app.handle_input(InputEvent::PointerLeave);
        assert_eq!(app.session().hovered(), None);
    }

    #[test]
    fn test_round_cycles_through_reset() {
        let mut app = app();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ] {
            app.handle_input(InputEvent::Move(pos));
        }
        assert_eq!(app.session().phase(), Phase::AwaitingReset);

        app.acknowledge_reset();
        assert_eq!(app.session().phase(), Phase::InProgress);
        assert_eq!(app.session().turn(), 0);
    }
}
