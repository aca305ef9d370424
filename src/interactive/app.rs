//! TUI application state and logic

use crate::commands::achievable_words;
use crate::core::SubmissionResult;
use crate::dictionary::WordListDictionary;
use crate::game::Game;
use crate::output::formatters::{rejection_message, rejection_title};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input accepted into the text field
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App {
    pub game: Game<WordListDictionary>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Dictionary words still findable in the current round
    pub remaining_words: usize,
    /// Score for finding every word in the current round
    pub max_score: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game<WordListDictionary>) -> Self {
        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            remaining_words: 0,
            max_score: 0,
            should_quit: false,
        };

        app.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app.add_message(
            "Enter submits, Ctrl-N starts a new round.",
            MessageStyle::Info,
        );
        app.refresh_hints(true);
        app
    }

    /// Recount the words left to find; on a new round also the maximum score
    fn refresh_hints(&mut self, new_round: bool) {
        let remaining = achievable_words(self.game.round(), self.game.dictionary());
        if new_round {
            self.max_score = remaining.iter().map(|w| crate::core::letter_count(w)).sum();
        }
        self.remaining_words = remaining.len();
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            SubmissionResult::Accepted { word, score_delta } => {
                self.refresh_hints(false);
                self.add_message(
                    &format!("{} +{score_delta}", word.to_uppercase()),
                    MessageStyle::Success,
                );
                if self.remaining_words == 0 {
                    self.add_message(
                        "🎉 You found every word! Press Ctrl-N for a new round.",
                        MessageStyle::Success,
                    );
                }
            }
            SubmissionResult::Rejected { reason } => {
                let message = format!(
                    "{}: {}",
                    rejection_title(reason),
                    rejection_message(reason, self.game.round().root_word())
                );
                self.add_message(&message, MessageStyle::Error);
                // Keep the rejected word so it can be corrected
                self.input_buffer = input;
            }
        }
    }

    pub fn new_round(&mut self) {
        match self.game.reset() {
            Ok(_) => {
                self.input_buffer.clear();
                self.messages.clear();
                self.refresh_hints(true);
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT_LEN && !c.is_control() {
            self.input_buffer.push(c);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_round(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
