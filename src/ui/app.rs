//! Main TUI application state and logic

use crate::config::Config;
use crate::game::{CellIndex, Game, NavigationError};
use crate::ui::panes::{self, CellButton, HistoryEntry};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// The main application state
pub struct App {
    /// The game being played
    pub game: Game,

    /// Glyphs and replay speed
    pub config: Config,

    /// History entry under the keyboard cursor
    pub selected_entry: usize,

    /// Scroll offset of the history list
    pub history_scroll: usize,

    /// Cells drawn in the last frame, for mouse hit-testing
    pub cell_buttons: Vec<CellButton>,

    /// History entries drawn in the last frame, for mouse hit-testing
    pub history_entries: Vec<HistoryEntry>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether replay mode is active
    pub is_replaying: bool,

    /// Last time a step was taken in replay mode
    pub last_replay_time: Instant,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            game: Game::new(),
            config,
            selected_entry: 0,
            history_scroll: 0,
            cell_buttons: Vec::new(),
            history_entries: Vec::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
            is_replaying: false,
            last_replay_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_replaying && self.last_replay_time.elapsed() >= self.config.replay_interval {
                self.replay_tick();
            }

            // Poll with a timeout so replay keeps ticking without input
            if event::poll(Duration::from_millis(50))? {
                self.handle_event(event::read()?);
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        // Board (left) | History (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        self.cell_buttons = panes::render_board_pane(
            frame,
            columns[0],
            &self.game.board(),
            &self.config,
            self.game.current_step(),
        );

        self.history_entries = panes::render_history_pane(
            frame,
            columns[1],
            &self.game.move_labels(),
            self.game.current_step(),
            self.selected_entry,
            &mut self.history_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.game.current_step(),
            self.game.history().last_step(),
            self.is_replaying,
        );
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        debug!(code = ?key.code, "key");
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(index) = CellIndex::from_digit(c) {
                    self.activate_cell(index);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_replaying = false;
                self.game.restart();
                self.sync_selection();
                self.status_message = "New game".to_string();
            }
            KeyCode::Left => {
                self.is_replaying = false;
                let result = self.game.step_backward();
                self.after_step(result, "Stepped back");
            }
            KeyCode::Right => {
                self.is_replaying = false;
                let result = self.game.step_forward();
                self.after_step(result, "Stepped forward");
            }
            KeyCode::Up => {
                self.selected_entry = self.selected_entry.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_entry < self.game.history().last_step() {
                    self.selected_entry += 1;
                }
            }
            KeyCode::Enter => {
                self.jump_to(self.selected_entry);
            }
            KeyCode::Home => {
                self.is_replaying = false;
                self.game.rewind_to_start();
                self.sync_selection();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::End => {
                self.is_replaying = false;
                self.game.jump_to_end();
                self.sync_selection();
                self.status_message = "Jumped to latest move".to_string();
            }
            KeyCode::Char(' ') => self.toggle_replay(),
            _ => {}
        }
    }

    /// Handle mouse events; only left clicks do anything
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        let mut clicked_cell = None;
        for button in &self.cell_buttons {
            if button.click(column, row, || clicked_cell = Some(button.index)) {
                break;
            }
        }
        if let Some(index) = clicked_cell {
            self.activate_cell(index);
            return;
        }

        let clicked_step = self
            .history_entries
            .iter()
            .find(|entry| entry.contains(column, row))
            .map(|entry| entry.step);
        if let Some(step) = clicked_step {
            self.jump_to(step);
        }
    }

    /// Forward a cell activation to the board of the viewed step
    pub fn activate_cell(&mut self, index: CellIndex) {
        self.is_replaying = false;
        let board = self.game.board();
        let mut moved = false;
        board.activate_cell(index, |grid| {
            self.game.play(grid);
            moved = true;
        });

        if !moved {
            self.status_message = if board.winner().is_some() {
                "Game over. Jump back or press r to play again".to_string()
            } else {
                format!("Cell {} is taken", index.get() + 1)
            };
            return;
        }

        self.sync_selection();
        self.status_message = match self.game.board().winner() {
            Some(winner) => format!("{} wins!", self.config.glyph(winner)),
            None => format!("Played cell {}", index.get() + 1),
        };
    }

    /// Jump to a history entry
    pub fn jump_to(&mut self, step: usize) {
        if step > self.game.history().last_step() {
            return;
        }
        self.is_replaying = false;
        self.game.jump_to(step);
        self.sync_selection();
        self.status_message = if step == 0 {
            "Jumped to start".to_string()
        } else {
            format!("Jumped to move #{}", step)
        };
    }

    fn toggle_replay(&mut self) {
        self.is_replaying = !self.is_replaying;
        if self.is_replaying {
            if self.game.is_at_end() {
                self.game.rewind_to_start();
                self.sync_selection();
            }
            self.last_replay_time = Instant::now();
            self.status_message = "Replaying...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Advance replay by one step
    pub fn replay_tick(&mut self) {
        match self.game.step_forward() {
            Ok(()) => {
                self.sync_selection();
                self.status_message = "Replaying...".to_string();
            }
            Err(_) => {
                self.is_replaying = false;
                self.status_message = "Replay complete".to_string();
            }
        }
        self.last_replay_time = Instant::now();
    }

    fn after_step(&mut self, result: Result<(), NavigationError>, done: &str) {
        match result {
            Ok(()) => {
                self.sync_selection();
                self.status_message = done.to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step: {}", e);
            }
        }
    }

    /// Move the history cursor to the viewed step
    fn sync_selection(&mut self) {
        self.selected_entry = self.game.current_step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mark;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{backend::TestBackend, layout::Rect};

    fn test_app() -> App {
        let config = Config::new("X", "O", Duration::from_millis(10)).unwrap();
        App::new(config)
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        draw_sized(app, 80, 24)
    }

    fn draw_sized(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }

    /// Text inside `area`, borders excluded
    fn interior_text(terminal: &Terminal<TestBackend>, area: Rect) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for y in (area.y + 1)..(area.y + area.height - 1) {
            for x in (area.x + 1)..(area.x + area.width - 1) {
                text.push_str(buffer.content[y as usize * width + x as usize].symbol());
            }
        }
        text.trim().to_string()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn left_click(app: &mut App, column: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content.chunks(buffer.area.width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game.current_step(), 1);
        assert_eq!(
            app.game.current_grid().get(CellIndex::new(4).unwrap()),
            Mark::X
        );

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game.current_step(), 1);
        assert_eq!(app.status_message, "Cell 5 is taken");
    }

    #[test]
    fn test_render_shows_status_and_history() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('1'));
        let terminal = draw(&mut app);
        let text = screen_text(&terminal);

        assert!(text.contains("Next player: O"));
        assert!(text.contains("A New Game!"));
        assert!(text.contains("Go to move #1"));
        assert_eq!(app.cell_buttons.len(), 9);
        assert_eq!(app.history_entries.len(), 2);
    }

    #[test]
    fn test_mouse_clicks_cells_and_history() {
        let mut app = test_app();
        draw(&mut app);

        let center = app.cell_buttons[4].area;
        left_click(&mut app, center.x + 1, center.y + 1);
        assert_eq!(app.game.current_step(), 1);

        draw(&mut app);
        let corner = app.cell_buttons[0].area;
        left_click(&mut app, corner.x, corner.y);
        assert_eq!(app.game.current_step(), 2);

        draw(&mut app);
        let first = app.history_entries[0].area;
        left_click(&mut app, first.x, first.y);
        assert_eq!(app.game.current_step(), 0);
        assert_eq!(app.game.history().len(), 3);
    }

    #[test]
    fn test_keyboard_history_navigation() {
        let mut app = test_app();
        for c in ['1', '4', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.selected_entry, 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.current_step(), 1);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.game.current_step(), 0);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.status_message, "Cannot step: already at the start of the game");

        press(&mut app, KeyCode::End);
        assert_eq!(app.game.current_step(), 3);
        press(&mut app, KeyCode::Home);
        assert!(app.game.is_at_start());
    }

    #[test]
    fn test_replay_runs_to_end() {
        let mut app = test_app();
        for c in ['1', '4', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_replaying);
        assert_eq!(app.game.current_step(), 0);

        for _ in 0..3 {
            app.replay_tick();
        }
        assert_eq!(app.game.current_step(), 3);
        assert!(app.is_replaying);

        app.replay_tick();
        assert!(!app.is_replaying);
        assert_eq!(app.status_message, "Replay complete");
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = test_app();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.status_message, "X wins!");

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.game.current_step(), 5);
        assert_eq!(
            app.status_message,
            "Game over. Jump back or press r to play again"
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game, Game::new());
        assert_eq!(app.selected_entry, 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_empty_cells_render_blank() {
        let mut app = test_app();
        let terminal = draw(&mut app);
        for button in &app.cell_buttons {
            assert_eq!(interior_text(&terminal, button.area), "", "cell {}", button.index);
        }

        press(&mut app, KeyCode::Char('5'));
        let terminal = draw(&mut app);
        assert_eq!(interior_text(&terminal, app.cell_buttons[4].area), "X");
        assert_eq!(interior_text(&terminal, app.cell_buttons[3].area), "");
    }

    #[test]
    fn test_history_scrolls_to_keep_selection_visible() {
        let mut app = test_app();
        // Eight moves without a winner
        for c in ['1', '2', '3', '5', '4', '6', '8', '7'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.game.history().len(), 9);

        // A 6-row history pane above the status bar leaves 4 visible entries
        draw_sized(&mut app, 80, 7);
        let steps: Vec<usize> = app.history_entries.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![5, 6, 7, 8]);
        assert_eq!(app.history_scroll, 5);

        for _ in 0..6 {
            press(&mut app, KeyCode::Up);
        }
        draw_sized(&mut app, 80, 7);
        let steps: Vec<usize> = app.history_entries.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![2, 3, 4, 5]);

        let top = app.history_entries[0].area;
        left_click(&mut app, top.x, top.y);
        assert_eq!(app.game.current_step(), 2);
    }

    #[test]
    fn test_status_bar_lists_navigation_keys() {
        let mut app = test_app();
        let terminal = draw_sized(&mut app, 300, 24);
        let text = screen_text(&terminal);
        assert!(text.contains("1-9"));
        assert!(text.contains("Home/End"));
    }

    #[test]
    fn test_backspace_is_unbound() {
        let mut app = test_app();
        for c in ['1', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.current_step(), 2);
    }
}
