//! Stateless UI rendering for quantum tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use quantum_tictactoe::{GameSession, GameStatus, Position, Symbol};

use super::input::BoardGeometry;

/// Renders the session and returns where the grid was drawn.
pub fn draw<P>(frame: &mut Frame, session: &GameSession<P>) -> BoardGeometry
where
    P: quantum_tictactoe::CandidatePicker,
{
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    // Title
    let title = Paragraph::new("Quantum Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Board
    let geometry = BoardGeometry::centered(chunks[1]);
    let winning_line = session.winning_line();
    for pos in Position::ALL {
        let highlight = winning_line.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, &geometry, session, pos, highlight);
    }

    // Status
    let status = Paragraph::new(status_line(session))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    geometry
}

fn draw_cell<P>(
    frame: &mut Frame,
    geometry: &BoardGeometry,
    session: &GameSession<P>,
    pos: Position,
    highlight: bool,
) where
    P: quantum_tictactoe::CandidatePicker,
{
    let area = geometry.cell_rect(pos).intersection(frame.area());
    if area.is_empty() {
        return;
    }

    let board = session.board();
    let content = match board.resolved(pos) {
        Some(symbol) => Span::styled(symbol.to_string(), symbol_style(symbol)),
        None => {
            let marks: Vec<String> = board.tentative(pos).iter().map(Symbol::to_string).collect();
            Span::raw(marks.join(", "))
        }
    };

    let hovered = session.hovered() == Some(pos)
        && !board.is_resolved(pos)
        && session.status() == GameStatus::InProgress;
    let border = if highlight {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if hovered {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let background = if hovered {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(Text::from(vec![Line::default(), Line::from(content)]))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(background)
        .block(Block::default().borders(Borders::ALL).border_style(border));

    frame.render_widget(paragraph, area);
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Red,
        Symbol::O => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Status bar text for the session.
pub fn status_line<P>(session: &GameSession<P>) -> String
where
    P: quantum_tictactoe::CandidatePicker,
{
    match session.status() {
        GameStatus::InProgress => format!(
            "Player {}'s turn (move {}). Click a cell or use arrows + Enter. q quits.",
            session.current_symbol(),
            session.turn() + 1
        ),
        GameStatus::Won(winner) => format!("Player {} wins! New round starting...", winner),
        GameStatus::Draw => "Draw! Every cell collapsed. New round starting...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_tictactoe::{CollapseRules, RngPicker};

    #[test]
    fn test_status_line_follows_turns() {
        let mut session = GameSession::new(RngPicker::seeded(Some(3)), CollapseRules::default());
        assert!(status_line(&session).starts_with("Player X's turn (move 1)"));

        session.apply_move(Position::TopLeft);
        assert!(status_line(&session).starts_with("Player O's turn (move 2)"));
    }

    #[test]
    fn test_status_line_announces_winner() {
        let mut session = GameSession::new(RngPicker::seeded(Some(3)), CollapseRules::default());
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ] {
            session.apply_move(pos);
        }
        assert_eq!(status_line(&session), "Player X wins! New round starting...");
    }
}
