use std::time::Duration;

use crate::quiz::mode::Mode;
use crate::quiz::score::Score;

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// Events a session announces on its own, outside of any caller's operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswersRevealed(bool),
    QuizReady(String, usize, Mode, bool),
    QuizSubmitted(Score),
    TimeRemaining(Duration),
    TimeUp,
}

pub trait Output {
    fn say(&self, message: &Message);
}
