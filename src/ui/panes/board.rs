//! Board pane: status line above a 3×3 grid of cells

use super::cell::CellButton;
use crate::config::Config;
use crate::game::{Board, CellIndex};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Cell size in terminal columns and rows, borders included
const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 5;

/// Render the board pane and return the cells that were drawn
pub fn render_board_pane(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    config: &Config,
    step: usize,
) -> Vec<CellButton> {
    let block = Block::default()
        .title(format!(" Board · move #{} ", step))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let status_style = if board.winner().is_some() {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    let status = Paragraph::new(board.status(|m| config.glyph(m).to_string()))
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[0]);

    let winning = board.winning_line();
    let grid_area = center_rect(rows[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let buttons = cell_layout(grid_area)
        .into_iter()
        .map(|(index, cell_area)| CellButton::new(index, board.grid().get(index), cell_area))
        .collect::<Vec<_>>();

    for button in &buttons {
        let is_winning = winning.is_some_and(|line| line.contains(&button.index));
        button.render(frame, config.glyph(button.mark), is_winning);
    }

    buttons
}

/// Split `area` into nine cell areas, row-major
fn cell_layout(area: Rect) -> Vec<(CellIndex, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(area);

    CellIndex::all()
        .map(|index| {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CELL_WIDTH); 3])
                .split(rows[index.row()]);
            (index, cols[index.col()])
        })
        .collect()
}

/// A `width`×`height` rect centered in `area`, shrunk to fit
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
