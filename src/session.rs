//! The quiz state machine.
//!
//! A [`QuizSession`] walks a fixed list of questions, keeps the score and
//! drives the per-question countdown. It knows nothing about rendering; the
//! UI reads its accessors and calls its operations.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::models::{NUM_OPTIONS, Question, SessionPhase, Summary};
use crate::timer::IntervalTimer;

/// Seconds allowed for every question.
pub const SECONDS_PER_QUESTION: u32 = 20;

/// Countdown shown in warning colour at or below this many seconds.
pub const WARNING_THRESHOLD: u32 = 10;

/// Countdown shown in critical colour at or below this many seconds.
pub const CRITICAL_THRESHOLD: u32 = 5;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How urgent the countdown currently looks. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerLevel {
    Normal,
    Warning,
    Critical,
}

impl TimerLevel {
    pub fn from_time_left(time_left: u32) -> Self {
        if time_left <= CRITICAL_THRESHOLD {
            Self::Critical
        } else if time_left <= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// What a state-changing operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// Now showing the question at this index.
    Moved(usize),
    /// The last question was submitted.
    Completed(Summary),
}

/// Result of a single timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is not running; nothing happened.
    Idle,
    /// Countdown decreased to this many seconds.
    Counting(u32),
    /// Countdown hit zero and the question was submitted.
    TimedOut(Transition),
}

pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    time_left: u32,
    selected: Option<usize>,
    timer: IntervalTimer,
    summary: Option<Summary>,
}

impl QuizSession {
    /// Creates a session positioned on the first question.
    ///
    /// The countdown does not run until [`QuizSession::start`] is called.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            time_left: SECONDS_PER_QUESTION,
            selected: None,
            timer: IntervalTimer::new(TICK_PERIOD),
            summary: None,
        }
    }

    pub fn start(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.summary = None;
        self.show_current();
        info!(questions = self.total_questions(), "quiz session started");
    }

    pub fn restart(&mut self) {
        info!("restarting quiz");
        self.start();
    }

    /// Stops the countdown for good. Called when the window goes away.
    pub fn dispose(&mut self) {
        self.timer.stop();
        debug!("quiz session disposed");
    }

    pub fn phase(&self) -> SessionPhase {
        match self.summary {
            Some(summary) => SessionPhase::Completed(summary),
            None => SessionPhase::Active {
                index: self.current_index,
            },
        }
    }

    pub fn is_completed(&self) -> bool {
        self.summary.is_some()
    }

    /// The question on screen, `None` once the quiz is completed.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_completed() {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn timer_level(&self) -> TimerLevel {
        TimerLevel::from_time_left(self.time_left)
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn can_retreat(&self) -> bool {
        !self.is_completed() && self.current_index > 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Selects an option of the current question, replacing any previous
    /// choice.
    pub fn select(&mut self, option: usize) {
        if self.is_completed() || option >= NUM_OPTIONS {
            return;
        }
        self.selected = Some(option);
    }

    /// Runs a tick if the countdown timer is due at `now`.
    pub fn poll_timer(&mut self, now: Instant) -> TickOutcome {
        if self.timer.poll(now) {
            self.tick()
        } else {
            TickOutcome::Idle
        }
    }

    /// One elapsed second. Submits the question when time runs out.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.timer.is_running() || self.is_completed() {
            return TickOutcome::Idle;
        }

        self.time_left = self.time_left.saturating_sub(1);
        trace!(time_left = self.time_left, "tick");

        if self.time_left > 0 {
            return TickOutcome::Counting(self.time_left);
        }

        self.timer.stop();
        debug!(index = self.current_index, "time is up, submitting");
        TickOutcome::TimedOut(self.advance())
    }

    /// Submits the current question and moves on.
    pub fn advance(&mut self) -> Transition {
        if self.is_completed() {
            return Transition::Unchanged;
        }

        if let Some(question) = self.questions.get(self.current_index) {
            let correct = question.is_correct(self.selected);
            if correct {
                self.score = (self.score + 1).min(self.questions.len());
            }
            debug!(
                index = self.current_index,
                selected = ?self.selected,
                correct,
                score = self.score,
                "answer evaluated"
            );
        }

        self.current_index += 1;
        if self.current_index >= self.questions.len() {
            return Transition::Completed(self.finish());
        }

        self.show_current();
        Transition::Moved(self.current_index)
    }

    /// Goes back one question. The earlier answer is neither restored nor
    /// taken back out of the score.
    pub fn retreat(&mut self) -> Transition {
        if !self.can_retreat() {
            return Transition::Unchanged;
        }

        self.current_index -= 1;
        self.show_current();
        debug!(index = self.current_index, "moved back");
        Transition::Moved(self.current_index)
    }

    fn finish(&mut self) -> Summary {
        self.timer.stop();
        self.selected = None;

        let summary = Summary::new(self.score, self.questions.len());
        self.summary = Some(summary);
        info!(
            score = summary.score,
            total = summary.total,
            accuracy = %summary.accuracy_label(),
            "quiz completed"
        );
        summary
    }

    fn show_current(&mut self) {
        self.selected = None;
        self.time_left = SECONDS_PER_QUESTION;
        self.timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_questions;

    fn started() -> QuizSession {
        let mut session = QuizSession::new(builtin_questions());
        session.start();
        session
    }

    fn correct_answer(session: &QuizSession) -> usize {
        session.current_question().unwrap().correct_answer
    }

    fn run_out_the_clock(session: &mut QuizSession) -> TickOutcome {
        let mut outcome = TickOutcome::Idle;
        for _ in 0..SECONDS_PER_QUESTION {
            outcome = session.tick();
        }
        outcome
    }

    #[test]
    fn test_start_state() {
        let session = started();
        assert_eq!(session.phase(), SessionPhase::Active { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), SECONDS_PER_QUESTION);
        assert_eq!(session.selected_option(), None);
        assert!(session.is_timer_running());
    }

    #[test]
    fn test_every_question_renders_fresh() {
        let questions = builtin_questions();
        let mut session = started();

        for (index, expected) in questions.iter().enumerate() {
            let question = session.current_question().unwrap();
            assert_eq!(question.text, expected.text);
            assert_eq!(question.options, expected.options);
            assert_eq!(session.selected_option(), None);
            assert_eq!(session.current_index(), index);

            session.select(0);
            session.advance();
        }
    }

    #[test]
    fn test_correct_selection_scores_one() {
        let mut session = started();
        session.select(correct_answer(&session));
        assert_eq!(session.advance(), Transition::Moved(1));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_wrong_or_missing_selection_scores_nothing() {
        let mut session = started();
        let wrong = (correct_answer(&session) + 1) % NUM_OPTIONS;
        session.select(wrong);
        session.advance();
        assert_eq!(session.score(), 0);

        session.advance();
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut session = started();
        session.select(0);
        session.select(3);
        assert_eq!(session.selected_option(), Some(3));

        session.select(NUM_OPTIONS);
        assert_eq!(session.selected_option(), Some(3));
    }

    #[test]
    fn test_retreat_at_first_question_is_noop() {
        let mut session = started();
        session.select(1);
        session.tick();
        session.tick();

        assert_eq!(session.retreat(), Transition::Unchanged);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), SECONDS_PER_QUESTION - 2);
        assert_eq!(session.selected_option(), Some(1));
    }

    #[test]
    fn test_retreat_resets_question() {
        let mut session = started();
        session.advance();
        session.select(2);
        session.tick();

        assert_eq!(session.retreat(), Transition::Moved(0));
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.time_left(), SECONDS_PER_QUESTION);
        assert!(session.is_timer_running());
    }

    #[test]
    fn test_tick_counts_down() {
        let mut session = started();
        assert_eq!(session.tick(), TickOutcome::Counting(19));
        assert_eq!(session.tick(), TickOutcome::Counting(18));
        assert_eq!(session.time_left(), 18);
    }

    #[test]
    fn test_timeout_advances_exactly_once() {
        let mut session = started();
        for _ in 0..SECONDS_PER_QUESTION - 1 {
            assert!(matches!(session.tick(), TickOutcome::Counting(_)));
        }
        assert_eq!(
            session.tick(),
            TickOutcome::TimedOut(Transition::Moved(1))
        );
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.time_left(), SECONDS_PER_QUESTION);
    }

    #[test]
    fn test_timeout_submits_selection() {
        let mut session = started();
        session.select(correct_answer(&session));
        run_out_the_clock(&mut session);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_timer_level_thresholds() {
        assert_eq!(TimerLevel::from_time_left(20), TimerLevel::Normal);
        assert_eq!(TimerLevel::from_time_left(11), TimerLevel::Normal);
        assert_eq!(TimerLevel::from_time_left(10), TimerLevel::Warning);
        assert_eq!(TimerLevel::from_time_left(6), TimerLevel::Warning);
        assert_eq!(TimerLevel::from_time_left(5), TimerLevel::Critical);
        assert_eq!(TimerLevel::from_time_left(0), TimerLevel::Critical);
    }

    #[test]
    fn test_all_correct_scores_full_marks() {
        let mut session = started();
        let total = session.total_questions();

        for _ in 0..total - 1 {
            session.select(correct_answer(&session));
            assert!(matches!(session.advance(), Transition::Moved(_)));
        }
        assert!(session.is_last_question());
        session.select(correct_answer(&session));

        let Transition::Completed(summary) = session.advance() else {
            panic!("expected completion");
        };
        assert_eq!(summary, Summary::new(5, 5));
        assert_eq!(summary.accuracy_label(), "100.0%");
        assert!(!session.is_timer_running());
        assert!(session.phase().is_completed());
    }

    #[test]
    fn test_all_timeouts_score_zero() {
        let mut session = started();
        let mut timeouts = 0;
        let mut last = TickOutcome::Idle;

        while !session.is_completed() {
            last = run_out_the_clock(&mut session);
            if matches!(last, TickOutcome::TimedOut(_)) {
                timeouts += 1;
            }
        }

        assert_eq!(timeouts, 5);
        let TickOutcome::TimedOut(Transition::Completed(summary)) = last else {
            panic!("expected completion by timeout");
        };
        assert_eq!(summary.score, 0);
        assert_eq!(summary.accuracy_label(), "0.0%");
    }

    #[test]
    fn test_going_back_rescores_without_selection() {
        let mut session = started();
        session.select(correct_answer(&session));
        session.advance();
        assert_eq!(session.score(), 1);

        session.retreat();
        session.advance();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_going_back_can_count_twice() {
        let mut session = started();
        session.select(correct_answer(&session));
        session.advance();
        session.retreat();
        session.select(correct_answer(&session));
        session.advance();
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_score_never_exceeds_total() {
        let mut session = started();
        for _ in 0..10 {
            session.select(correct_answer(&session));
            session.advance();
            session.retreat();
        }
        assert_eq!(session.score(), session.total_questions());
    }

    #[test]
    fn test_completed_ignores_operations() {
        let mut session = started();
        while !session.is_completed() {
            session.advance();
        }
        let phase = session.phase();

        assert_eq!(session.advance(), Transition::Unchanged);
        assert_eq!(session.retreat(), Transition::Unchanged);
        assert_eq!(session.tick(), TickOutcome::Idle);
        session.select(0);
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.phase(), phase);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_restart_after_completion() {
        let mut session = started();
        session.select(correct_answer(&session));
        while !session.is_completed() {
            session.advance();
        }

        session.restart();
        assert_eq!(session.phase(), SessionPhase::Active { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.time_left(), SECONDS_PER_QUESTION);
        assert!(session.is_timer_running());
    }

    #[test]
    fn test_poll_timer_drives_ticks() {
        let mut session = started();
        let now = Instant::now();

        assert_eq!(session.poll_timer(now), TickOutcome::Idle);
        assert_eq!(
            session.poll_timer(now + TICK_PERIOD),
            TickOutcome::Counting(19)
        );
    }

    #[test]
    fn test_dispose_stops_ticking() {
        let mut session = started();
        session.dispose();
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.time_left(), SECONDS_PER_QUESTION);
    }
}
