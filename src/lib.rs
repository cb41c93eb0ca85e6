//! # timed-quiz
//!
//! A timed multiple-choice quiz for the terminal.
//!
//! Five built-in questions are shown one at a time, each with a twenty
//! second countdown. When the countdown runs out the question is submitted
//! as it stands. The final dialog reports score and accuracy and offers a
//! restart.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     Quiz::new().run()
//! }
//! ```
//!
//! The state machine can also be driven without a terminal:
//!
//! ```rust
//! use timed_quiz::{QuizSession, builtin_questions};
//!
//! let mut session = QuizSession::new(builtin_questions());
//! session.start();
//! session.select(2);
//! session.advance();
//! assert_eq!(session.score(), 1);
//! ```

mod app;
mod data;
mod error;
pub mod logging;
mod models;
mod session;
pub mod terminal;
mod timer;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

pub use app::{App, AppState};
pub use data::builtin_questions;
pub use error::QuizError;
pub use models::{NUM_OPTIONS, Question, SessionPhase, Summary};
pub use session::{
    QuizSession, SECONDS_PER_QUESTION, TickOutcome, TimerLevel, Transition,
};
pub use timer::IntervalTimer;

/// How long the loop waits for a key before checking the clock again.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Creates a quiz over the built-in questions.
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user closes the
    /// quiz or declines to restart.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app))?;

        app.on_clock(Instant::now());

        if !event::poll(INPUT_POLL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }

    Ok(())
}
