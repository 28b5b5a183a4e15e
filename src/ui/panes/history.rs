//! History pane: one jump entry per snapshot

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
};

/// A drawn history entry and the row that activates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub step: usize,
    pub area: Rect,
}

impl HistoryEntry {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// Render the history list and return the visible entries
///
/// `selected` is the keyboard cursor, `current_step` the step on the board.
/// The scroll offset is adjusted so the cursor stays visible.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    labels: &[String],
    current_step: usize,
    selected: usize,
    scroll_offset: &mut usize,
) -> Vec<HistoryEntry> {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);

    let visible_height = (inner.height as usize).max(1);
    if selected < *scroll_offset {
        *scroll_offset = selected;
    } else if selected >= *scroll_offset + visible_height {
        *scroll_offset = selected + 1 - visible_height;
    }
    let max_scroll = labels.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let offset = *scroll_offset;
    let mut entries = Vec::new();
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(step, label)| {
            let row = inner.y + (step - offset) as u16;
            entries.push(HistoryEntry {
                step,
                area: Rect::new(inner.x, row, inner.width, 1),
            });
            history_item(step, label, step == current_step, step == selected)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
    entries
}

fn history_item(step: usize, label: &str, is_current: bool, is_selected: bool) -> ListItem<'static> {
    let marker = if is_current { "▶ " } else { "  " };
    let mut label_style = if is_current {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    if is_selected {
        label_style = label_style.bg(DEFAULT_THEME.current_line_bg);
    }

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:>2}. ", step + 1),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
        Span::styled(label.to_string(), label_style),
    ]))
}
