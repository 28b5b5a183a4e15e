//! A single board cell
//!
//! The cell is a pure presentation delegate: it draws a mark and reports
//! activations. Whether an activation does anything is decided by the board.

use crate::game::{CellIndex, Mark};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// A drawn cell and the screen area that activates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellButton {
    pub index: CellIndex,
    pub mark: Mark,
    pub area: Rect,
}

impl CellButton {
    pub fn new(index: CellIndex, mark: Mark, area: Rect) -> Self {
        CellButton { index, mark, area }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Call `on_activate` once if `(column, row)` hits this cell
    pub fn click<F: FnOnce()>(&self, column: u16, row: u16, on_activate: F) -> bool {
        if self.contains(column, row) {
            on_activate();
            true
        } else {
            false
        }
    }

    /// Draw the cell; empty cells are blank
    pub fn render(&self, frame: &mut Frame, glyph: &str, is_winning: bool) {
        let mut block_style = Style::default();
        if is_winning {
            block_style = block_style.bg(DEFAULT_THEME.winning_line_bg);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .padding(Padding::new(0, 0, self.area.height.saturating_sub(3) / 2, 0))
            .style(block_style);

        let style = match self.mark {
            Mark::Empty => Style::default(),
            Mark::X => Style::default()
                .fg(DEFAULT_THEME.player_one)
                .add_modifier(Modifier::BOLD),
            Mark::O => Style::default()
                .fg(DEFAULT_THEME.player_two)
                .add_modifier(Modifier::BOLD),
        };
        let text = if self.mark.is_empty() { "" } else { glyph };

        let paragraph = Paragraph::new(text.to_string())
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, self.area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_inside_fires_once() {
        let button = CellButton::new(CellIndex::new(0).unwrap(), Mark::Empty, Rect::new(2, 3, 7, 3));
        let mut fired = 0;
        assert!(button.click(2, 3, || fired += 1));
        assert_eq!(fired, 1);
        assert!(button.click(8, 5, || fired += 1));
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let button = CellButton::new(CellIndex::new(0).unwrap(), Mark::X, Rect::new(2, 3, 7, 3));
        let mut fired = false;
        assert!(!button.click(9, 3, || fired = true));
        assert!(!button.click(2, 6, || fired = true));
        assert!(!fired);
    }
}
