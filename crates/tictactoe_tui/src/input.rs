//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell.
    Move(Direction),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Activate a cell by index.
    Activate(usize),
    /// Start a new game.
    Reset,
    /// Flip light/dark.
    ToggleTheme,
    /// Leave the app.
    Quit,
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Row above.
    Up,
    /// Row below.
    Down,
    /// Column to the left.
    Left,
    /// Column to the right.
    Right,
}

/// Maps a key event to a command. Releases and unbound keys map to `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Command::ActivateCursor,
        KeyCode::Char(c @ '1'..='9') => Command::Activate(c as usize - '1' as usize),
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char('t') => Command::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(command_for(press(KeyCode::Char('1'))), Some(Command::Activate(0)));
        assert_eq!(command_for(press(KeyCode::Char('9'))), Some(Command::Activate(8)));
        assert_eq!(command_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_controls() {
        assert_eq!(command_for(press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for(press(KeyCode::Char('t'))), Some(Command::ToggleTheme));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Enter)), Some(Command::ActivateCursor));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(key), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }
}
