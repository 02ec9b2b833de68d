//! Stateless UI rendering.

use noughts_core::{GameStatus, Line, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::strike::Strike;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders a full frame: title, board, status line, key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status_style = match app.game().state().status() {
        GameStatus::InProgress => Style::default().fg(Color::Green),
        GameStatus::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Drawn => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 or arrows + Enter to mark, click a square, 'r' to reset, 'q' to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Maps a mouse click to the board square under it.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    let cells = board_cells(screen_chunks(area)[1]);
    let point = ScreenPosition::new(column, row);
    Position::ALL
        .iter()
        .copied()
        .find(|pos| cells[pos.to_index()].contains(point))
}

fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Screen rectangles of the nine squares, row-major.
fn board_cells(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([3, 1, 3, 1, 3].map(Constraint::Length))
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([12, 1, 12, 1, 12].map(Constraint::Length))
            .split(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let cells = board_cells(area);
    let winning = app.game().state().status().winning_line();

    draw_separators(frame, area);
    for pos in Position::ALL {
        draw_cell(frame, cells[pos.to_index()], app, pos, winning);
    }
    if let Some(line) = winning {
        draw_strike(frame, &cells, line);
    }
}

fn draw_separators(frame: &mut Frame, area: Rect) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([3, 1, 3, 1, 3].map(Constraint::Length))
        .split(board_area);

    let style = Style::default().fg(Color::DarkGray);
    for row_area in [rows[1], rows[3]] {
        let sep = Paragraph::new("─".repeat(row_area.width as usize)).style(style);
        frame.render_widget(sep, row_area);
    }
    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([12, 1, 12, 1, 12].map(Constraint::Length))
            .split(row_area);
        for col_area in [cols[1], cols[3]] {
            let sep = Paragraph::new("│\n│\n│").style(style);
            frame.render_widget(sep, col_area);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: Option<Line>) {
    let state = app.game().state();
    let (symbol, base_style) = match state.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning.is_some_and(|line| line.contains(pos)) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if pos == app.cursor() && !state.status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Mark sits on the middle of the cell's three rows so the strike
    // decoration passes through it.
    let text = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(symbol, style)),
        TextLine::from(""),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Overlays the strike-through across the winning line, sparing the
/// marks themselves.
fn draw_strike(frame: &mut Frame, cells: &[Rect; 9], line: Line) {
    let (first, last) = line.endpoints();
    let strike = Strike::between(cells[first.to_index()], cells[last.to_index()]);
    let glyph = strike_glyph(line);
    let style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let mark_centers: Vec<(u16, u16)> = line
        .positions()
        .iter()
        .map(|pos| {
            let rect = cells[pos.to_index()];
            (rect.x + rect.width / 2, rect.y + rect.height / 2)
        })
        .collect();

    let buf = frame.buffer_mut();
    for point in strike.path() {
        if mark_centers.contains(&point) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(ScreenPosition::from(point)) {
            cell.set_char(glyph);
            cell.set_style(style);
        }
    }
}

fn strike_glyph(line: Line) -> char {
    match line {
        Line::TopRow | Line::MiddleRow | Line::BottomRow => '─',
        Line::LeftColumn | Line::MiddleColumn | Line::RightColumn => '│',
        Line::Diagonal => '╲',
        Line::AntiDiagonal => '╱',
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_cells_are_row_major_and_disjoint() {
        let area = Rect::new(0, 0, 80, 24);
        let cells = board_cells(area);

        for pos in Position::ALL {
            let rect = cells[pos.to_index()];
            assert!(rect.width > 0 && rect.height > 0);
            // Cells in the same row share y; columns increase left to right.
            let row_mate = cells[pos.row() * 3];
            assert_eq!(rect.y, row_mate.y);
        }
        assert!(cells[0].x < cells[1].x);
        assert!(cells[0].y < cells[3].y);
    }

    #[test]
    fn test_hit_test_finds_each_cell_center() {
        let area = Rect::new(0, 0, 80, 24);
        let cells = board_cells(screen_chunks(area)[1]);

        for pos in Position::ALL {
            let rect = cells[pos.to_index()];
            let hit = hit_test(area, rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(pos));
        }
    }

    #[test]
    fn test_hit_test_misses_outside_board() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test(area, 0, 0), None);
    }

    #[test]
    fn test_strike_glyph_orientation() {
        assert_eq!(strike_glyph(Line::TopRow), '─');
        assert_eq!(strike_glyph(Line::LeftColumn), '│');
        assert_eq!(strike_glyph(Line::Diagonal), '╲');
        assert_eq!(strike_glyph(Line::AntiDiagonal), '╱');
    }
}
