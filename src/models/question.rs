/// Number of answer options every question carries.
pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
}

impl Question {
    pub fn new(text: &str, options: [&str; NUM_OPTIONS], correct_answer: usize) -> Self {
        debug_assert!(correct_answer < NUM_OPTIONS);
        Self {
            text: text.to_string(),
            options: options.map(str::to_string),
            correct_answer,
        }
    }

    /// `None` never matches, so a missing selection is always wrong.
    pub fn is_correct(&self, selected: Option<usize>) -> bool {
        selected == Some(self.correct_answer)
    }
}
