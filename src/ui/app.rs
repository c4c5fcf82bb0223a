//! Main browser state and event loop

use crate::demos::{self, CATALOG};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Transcript,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Transcript,
            FocusedPane::Transcript => FocusedPane::Catalog,
        }
    }
}

/// The browser application state
pub struct App {
    /// Recorded lines per catalog entry, filled in when a demo is replayed
    transcripts: Vec<Option<Vec<String>>>,

    /// Reveal position per catalog entry (lines shown so far)
    revealed: Vec<usize>,

    /// Currently selected catalog entry
    selected: usize,

    /// Currently focused pane
    focused_pane: FocusedPane,

    /// Transcript pane scroll offset
    transcript_scroll: usize,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,
}

impl App {
    pub fn new() -> Self {
        App {
            transcripts: vec![None; CATALOG.len()],
            revealed: vec![0; CATALOG.len()],
            selected: 0,
            focused_pane: FocusedPane::Catalog,
            transcript_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready! Pick a demonstration and press Enter."),
        }
    }

    /// Run the browser event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Replay the selected demonstration against its sample input
    fn replay_selected(&mut self) {
        let demo = &CATALOG[self.selected];
        match demos::replay(demo) {
            Ok(transcript) => {
                let lines = transcript.lines();
                self.revealed[self.selected] = lines.len();
                self.transcripts[self.selected] = Some(lines);
                self.transcript_scroll = 0;
                self.status_message = format!("Replayed '{}'", demo.name);
            }
            Err(e) => {
                self.status_message = format!("'{}' stopped: {}", demo.name, e);
            }
        }
    }

    /// Reveal one more transcript line, following along as scrolling allows
    fn step_reveal(&mut self) {
        let Some(lines) = &self.transcripts[self.selected] else {
            self.replay_selected();
            if let Some(lines) = &self.transcripts[self.selected] {
                let total = lines.len();
                self.revealed[self.selected] = usize::from(total > 0);
            }
            return;
        };

        let total = lines.len();
        if self.revealed[self.selected] < total {
            self.revealed[self.selected] += 1;
            self.transcript_scroll = usize::MAX; // clamped to the bottom on render
        } else {
            self.status_message = String::from("End of transcript");
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        let replayed: Vec<bool> = self.transcripts.iter().map(|t| t.is_some()).collect();
        super::panes::render_catalog_pane(
            frame,
            columns[0],
            CATALOG,
            self.selected,
            &replayed,
            self.focused_pane == FocusedPane::Catalog,
        );

        let demo = &CATALOG[self.selected];
        super::panes::render_transcript_pane(
            frame,
            columns[1],
            demo.title,
            self.transcripts[self.selected].as_deref(),
            self.revealed[self.selected],
            self.focused_pane == FocusedPane::Transcript,
            &mut self.transcript_scroll,
        );

        let total = self.transcripts[self.selected]
            .as_ref()
            .map(|lines| lines.len())
            .unwrap_or(0);
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.revealed[self.selected],
            total,
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Enter => {
                self.replay_selected();
            }
            KeyCode::Char(' ') => {
                self.step_reveal();
            }
            KeyCode::Char('a') => {
                if let Some(lines) = &self.transcripts[self.selected] {
                    self.revealed[self.selected] = lines.len();
                    self.transcript_scroll = usize::MAX;
                }
            }
            KeyCode::Char('r') => {
                self.revealed[self.selected] = 0;
                self.transcript_scroll = 0;
                self.status_message = String::from("Reveal reset");
            }
            KeyCode::Up | KeyCode::Char('k') => match self.focused_pane {
                FocusedPane::Catalog => {
                    if self.selected > 0 {
                        self.selected -= 1;
                        self.transcript_scroll = 0;
                    }
                }
                FocusedPane::Transcript => {
                    self.transcript_scroll = self.transcript_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focused_pane {
                FocusedPane::Catalog => {
                    if self.selected + 1 < CATALOG.len() {
                        self.selected += 1;
                        self.transcript_scroll = 0;
                    }
                }
                FocusedPane::Transcript => {
                    self.transcript_scroll = self.transcript_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
