use crate::models::Question;

/// The fixed question set every session runs through.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
        ),
        Question::new(
            "Who wrote 'Romeo and Juliet'?",
            [
                "Charles Dickens",
                "Mark Twain",
                "William Shakespeare",
                "Leo Tolstoy",
            ],
            2,
        ),
        Question::new("What is 15 * 3?", ["35", "45", "55", "65"], 1),
        Question::new(
            "Which language is used to build Android apps?",
            ["Python", "Java", "C++", "Swift"],
            1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NUM_OPTIONS;

    #[test]
    fn test_builtin_questions() {
        let questions = builtin_questions();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.correct_answer < NUM_OPTIONS));
        assert_eq!(questions[0].options[2], "Paris");
        assert_eq!(questions[3].options[questions[3].correct_answer], "45");
    }
}
