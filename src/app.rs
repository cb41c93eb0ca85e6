use std::time::Instant;

use crossterm::event::KeyCode;
use tracing::info;

use crate::data::builtin_questions;
use crate::models::{NUM_OPTIONS, Question};
use crate::session::{QuizSession, TickOutcome, Transition};

/// Which screen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Answering questions.
    Quiz,
    /// Final score dialog.
    Result,
    /// "Restart?" prompt shown after the score dialog.
    ConfirmRestart,
}

/// Binds a [`QuizSession`] to keyboard input.
///
/// Everything here besides the session is UI-only: which option row the
/// cursor is on and which end-of-quiz dialog is showing.
pub struct App {
    pub state: AppState,
    session: QuizSession,
    cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_questions(builtin_questions())
    }

    /// Creates the app and starts the session.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut session = QuizSession::new(questions);
        session.start();

        Self {
            state: AppState::Quiz,
            session,
            cursor: 0,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn move_cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % NUM_OPTIONS;
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = (self.cursor + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn select_under_cursor(&mut self) {
        self.session.select(self.cursor);
    }

    pub fn select_option(&mut self, option: usize) {
        if option < NUM_OPTIONS {
            self.cursor = option;
            self.session.select(option);
        }
    }

    pub fn next(&mut self) {
        let transition = self.session.advance();
        self.apply(transition);
    }

    pub fn previous(&mut self) {
        let transition = self.session.retreat();
        self.apply(transition);
    }

    /// Lets the countdown run a tick if one is due.
    pub fn on_clock(&mut self, now: Instant) {
        if let TickOutcome::TimedOut(transition) = self.session.poll_timer(now) {
            self.apply(transition);
        }
    }

    pub fn dismiss_result(&mut self) {
        if self.state == AppState::Result {
            self.state = AppState::ConfirmRestart;
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.cursor = 0;
        self.state = AppState::Quiz;
    }

    /// Closes the window.
    pub fn quit(&mut self) {
        self.session.dispose();
        self.should_quit = true;
        info!("quiz closed");
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.state {
            AppState::Quiz => self.handle_quiz_key(key),
            AppState::Result => self.handle_result_key(key),
            AppState::ConfirmRestart => self.handle_confirm_key(key),
        }
    }

    fn handle_quiz_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Char(' ') => self.select_under_cursor(),
            KeyCode::Char(c @ '1'..='4') => self.select_option(c as usize - '1' as usize),
            KeyCode::Char(c @ 'a'..='d') => self.select_option(c as usize - 'a' as usize),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => self.next(),
            KeyCode::Left | KeyCode::Backspace | KeyCode::Char('p') => self.previous(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.dismiss_result(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => self.restart(),
            KeyCode::Esc
            | KeyCode::Char('n')
            | KeyCode::Char('N')
            | KeyCode::Char('q')
            | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Unchanged => {}
            Transition::Moved(_) => self.cursor = 0,
            Transition::Completed(_) => {
                self.cursor = 0;
                self.state = AppState::Result;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
