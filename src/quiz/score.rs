use std::collections::HashMap;

use crate::quiz::definition::Quiz;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn compute(quiz: &Quiz, answers: &HashMap<usize, String>) -> Self {
        let correct = quiz
            .get_questions()
            .iter()
            .enumerate()
            .filter(|(i, q)| answers.get(i).map_or(false, |a| q.is_correct(a)))
            .count();
        Score {
            correct,
            total: quiz.len(),
        }
    }

    /// Percentage of correct answers, rounded half up.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((200 * self.correct + self.total) / (2 * self.total)) as u32
    }
}
