/// Final result of one pass through the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    /// Percentage of correct answers, `0.0` for an empty quiz.
    pub fn accuracy(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Accuracy with one decimal place, e.g. `"60.0%"`.
    pub fn accuracy_label(&self) -> String {
        format!("{:.1}%", self.accuracy())
    }
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Showing the question at `index`.
    Active { index: usize },
    /// Every question has been submitted.
    Completed(Summary),
}

impl SessionPhase {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
