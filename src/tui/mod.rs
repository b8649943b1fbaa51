//! Terminal UI for quantum tic-tac-toe.

mod app;
mod input;
mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quantum_tictactoe::{CandidatePicker, GameSession, Phase};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, instrument};

use app::App;

/// How long one poll waits for terminal input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the game loop until the player quits.
#[instrument(skip(session))]
pub fn run_tui<P: CandidatePicker>(session: GameSession<P>, round_pause: Duration) -> Result<()> {
    info!("Starting Quantum Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(session), round_pause);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("TUI closed");
    res
}

fn run_app<P: CandidatePicker>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<P>,
    round_pause: Duration,
) -> Result<()> {
    loop {
        let mut geometry = app.geometry();
        terminal.draw(|frame| geometry = ui::draw(frame, app.session()))?;
        app.set_geometry(geometry);

        // The finished board stays on screen for the pause; input waits.
        if app.session().phase() == Phase::AwaitingReset {
            debug!(?round_pause, "Round over, pausing before reset");
            std::thread::sleep(round_pause);
            app.acknowledge_reset();
            continue;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let raw = event::read()?;
        if let Some(input) = input::translate(&raw, &app.geometry(), app.session().hovered())
            && app.handle_input(input).is_break()
        {
            return Ok(());
        }
    }
}
