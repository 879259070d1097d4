//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::input::{format_array, parse_array};
use crate::playback::{Cadence, PlaybackController, PlaybackState, TickOutcome};
use crate::ui::panes::{self, ControlsRenderData, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Event poll timeout; bounds how late a due tick can be applied
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Whether keystrokes go to the controls or the array input box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// The main application state
pub struct App {
    /// Playback of the current trace
    pub controller: PlaybackController,

    /// Algorithm chosen in the selector (applies on the next start)
    pub selected: Algorithm,

    pub input_mode: InputMode,

    /// Contents of the array input box
    pub input_buffer: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected action
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(controller: PlaybackController, selected: Algorithm) -> Self {
        let input_buffer = format_array(&controller.display().array);
        App {
            controller,
            selected,
            input_mode: InputMode::Normal,
            input_buffer,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Some(outcome) = self.controller.poll(Instant::now()) {
                self.on_tick(outcome);
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn on_tick(&mut self, outcome: TickOutcome) {
        if self.controller.state() == PlaybackState::Finished {
            self.set_status("Sorting complete");
        } else if let TickOutcome::Applied(_) = outcome {
            self.set_status("Playing...");
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let display = self.controller.display();
        let running = self.controller.algorithm();
        let recursion = display
            .recursion
            .as_ref()
            .zip(running.filter(|a| a.is_recursive()));
        let total = self.controller.total_steps();

        let mut constraints = vec![
            Constraint::Length(if running.is_some() { 5 } else { 4 }),
            Constraint::Min(8),
        ];
        if recursion.is_some() {
            constraints.push(Constraint::Length(6));
        }
        if total > 0 {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());
        let mut next = 0;
        let mut take = || {
            let area = chunks[next];
            next += 1;
            area
        };

        panes::render_controls_pane(
            frame,
            take(),
            ControlsRenderData {
                selected: self.selected,
                running,
                array_text: &self.input_buffer,
                is_editing: self.input_mode == InputMode::Editing,
                cadence: self.controller.cadence(),
                is_playing: self.controller.is_running(),
            },
        );

        panes::render_bars_pane(frame, take(), display, running);

        if let Some((info, algorithm)) = recursion {
            panes::render_recursion_pane(frame, take(), info, algorithm, &display.array);
        }

        if total > 0 {
            panes::render_progress_pane(frame, take(), self.controller.position(), total);
        }

        panes::render_status_bar(
            frame,
            take(),
            StatusRenderData {
                message: &self.status_message,
                position: self.controller.position(),
                total_steps: total,
                state: self.controller.state(),
                is_error: self.status_is_error,
                is_editing: self.input_mode == InputMode::Editing,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Editing => self.handle_edit_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_playback();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.ensure_stopped("reset") {
                    self.controller.reset();
                    self.set_status("Reset");
                }
            }
            KeyCode::Char('a') | KeyCode::Right => {
                if self.ensure_stopped("change the algorithm") {
                    self.selected = self.selected.next();
                    self.set_status(&format!("Selected {}", self.selected.display_name()));
                }
            }
            KeyCode::Char('A') | KeyCode::Left => {
                if self.ensure_stopped("change the algorithm") {
                    self.selected = self.selected.prev();
                    self.set_status(&format!("Selected {}", self.selected.display_name()));
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.change_cadence(Cadence::faster);
            }
            KeyCode::Char('-') | KeyCode::Down => {
                self.change_cadence(Cadence::slower);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if self.ensure_stopped("edit the array") {
                    self.input_mode = InputMode::Editing;
                    self.set_status("Editing array");
                }
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_array(),
            KeyCode::Esc => {
                self.input_buffer = format_array(&self.controller.display().array);
                self.input_mode = InputMode::Normal;
                self.set_status("Edit cancelled");
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | ' ' | '-' | '+') => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn toggle_playback(&mut self) {
        match self.controller.toggle(self.selected.key()) {
            Ok(PlaybackState::Running) => self.set_status("Playing..."),
            Ok(_) => self.set_status("Paused"),
            Err(e) => self.set_error(&e.to_string()),
        }
    }

    fn submit_array(&mut self) {
        let result = parse_array(&self.input_buffer)
            .map_err(|e| e.to_string())
            .and_then(|values| {
                self.controller
                    .load_array(values)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => {
                self.input_buffer = format_array(&self.controller.display().array);
                self.input_mode = InputMode::Normal;
                self.set_status("Array updated");
            }
            Err(message) => {
                log::warn!("array input rejected: {}", message);
                self.set_error(&message);
            }
        }
    }

    fn change_cadence(&mut self, adjust: fn(Cadence) -> Cadence) {
        if !self.ensure_stopped("change the speed") {
            return;
        }
        let cadence = adjust(self.controller.cadence());
        self.controller.set_cadence(cadence);
        self.set_status(&format!("Speed: {}ms", cadence.display_speed()));
    }

    /// Controls are disabled while playing
    fn ensure_stopped(&mut self, action: &str) -> bool {
        if self.controller.is_running() {
            self.set_error(&format!("Cannot {} while playing", action));
            false
        } else {
            true
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.status_is_error = true;
    }
}
