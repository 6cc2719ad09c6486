//! Stateless UI rendering for tic-tac-toe.
//!
//! Everything drawn comes from a [`BoardView`]; nothing here reads or
//! changes the game directly.

use crate::palette::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{BoardView, CellView, Mark, Position, Theme};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "arrows/hjkl move · enter/1-9 place · r reset · t theme · q quit";

/// Screen regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Whole board including grid lines.
    pub board: Rect,
    /// One rect per cell, in index order.
    pub cells: [Rect; 9],
    /// Status box.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(3), // Status
                Constraint::Length(1), // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| cell_rect(board, pos));

        Self {
            title: chunks[0],
            board,
            cells,
            status: chunks[2],
            help: chunks[3],
        }
    }

    /// Cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let r = self.cells[pos.to_index()];
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Position, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let area = frame.area();
    let layout = ScreenLayout::new(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let title = Paragraph::new(format!("Tic Tac Toe · {theme}"))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(title, layout.title);

    draw_grid(frame, layout.board, &palette);
    for cell in &view.cells {
        let rect = layout.cells[cell.position.to_index()].intersection(area);
        draw_cell(frame, rect, cell, cell.position == cursor, &palette);
    }

    let status_style = if view.game_over {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    let status = Paragraph::new(view.status.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: &CellView,
    under_cursor: bool,
    palette: &Palette,
) {
    let (symbol, mut style) = match cell.mark {
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
        None if cell.enabled => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(palette.muted),
        ),
        None => (
            "·".to_string(),
            Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
        ),
    };

    if cell.recent {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let background = if cell.winning {
        Some(palette.winning)
    } else if under_cursor && cell.enabled {
        Some(palette.cursor)
    } else {
        None
    };

    let mut block_style = Style::default();
    if let Some(bg) = background {
        block_style = block_style.bg(bg);
        style = style.bg(bg);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .style(block_style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_grid(frame: &mut Frame, board: Rect, palette: &Palette) {
    let style = Style::default().fg(palette.muted);

    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{segment}┼{segment}┼{segment}");
    for r in 0..2 {
        let y = board.y + r * (CELL_HEIGHT + 1) + CELL_HEIGHT;
        let area = Rect::new(board.x, y, board.width, 1).intersection(frame.area());
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), area);
    }

    let vertical: Vec<Line> = (0..CELL_HEIGHT).map(|_| Line::from("│")).collect();
    for r in 0..3 {
        for c in 0..2 {
            let x = board.x + c * (CELL_WIDTH + 1) + CELL_WIDTH;
            let y = board.y + r * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(frame.area());
            frame.render_widget(Paragraph::new(vertical.clone()).style(style), area);
        }
    }
}

fn cell_rect(board: Rect, pos: Position) -> Rect {
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    Rect::new(
        board.x + col * (CELL_WIDTH + 1),
        board.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
