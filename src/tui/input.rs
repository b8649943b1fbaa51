//! Translation of terminal events into game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use quantum_tictactoe::{InputEvent, Position};
use ratatui::layout::Rect;

/// Width of one rendered cell, in terminal columns.
pub const CELL_WIDTH: u16 = 16;
/// Height of one rendered cell, in terminal rows.
pub const CELL_HEIGHT: u16 = 5;

/// Where the grid was last drawn.
///
/// Maps terminal coordinates to cells by dividing by the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardGeometry {
    x: u16,
    y: u16,
    cell_width: u16,
    cell_height: u16,
}

impl BoardGeometry {
    /// Creates a geometry with its top-left corner at (`x`, `y`).
    pub fn new(x: u16, y: u16, cell_width: u16, cell_height: u16) -> Self {
        Self {
            x,
            y,
            cell_width,
            cell_height,
        }
    }

    /// Centers a grid of default-sized cells in `area`.
    pub fn centered(area: Rect) -> Self {
        let width = CELL_WIDTH * 3;
        let height = CELL_HEIGHT * 3;
        Self::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Cell under terminal coordinate (`column`, `row`).
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        let col = column.checked_sub(self.x)? / self.cell_width;
        let row = row.checked_sub(self.y)? / self.cell_height;
        Position::from_row_col(usize::from(row), usize::from(col))
    }

    /// Screen area of `pos`.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.x + self.cell_width * pos.col() as u16,
            self.y + self.cell_height * pos.row() as u16,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Translates a terminal event into game input.
///
/// `hovered` is the cell currently under the cursor; arrow keys move it
/// and Enter/Space place a mark there.
pub fn translate(
    event: &Event,
    geometry: &BoardGeometry,
    hovered: Option<Position>,
) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key, hovered),
        Event::Mouse(mouse) => translate_mouse(mouse, geometry),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, hovered: Option<Position>) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            Some(InputEvent::Move(hovered.unwrap_or(Position::Center)))
        }
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            let cursor = hovered.map_or(Position::Center, |pos| move_cursor(pos, code));
            Some(InputEvent::PointerHover(cursor))
        }
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, geometry: &BoardGeometry) -> Option<InputEvent> {
    let cell = geometry.cell_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => cell.map(InputEvent::Move),
        MouseEventKind::Moved => Some(cell.map_or(InputEvent::PointerLeave, InputEvent::PointerHover)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the grid edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
