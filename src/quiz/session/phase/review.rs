use std::time::Duration;

use crate::output::{Message, Output};
use crate::quiz::session::phase::Sheet;
use crate::quiz::session::{State, Token};

pub struct ReviewState<O: Output> {
    pub sheet: Sheet,
    pub token: Token,
    pub reveal_answers: bool,
    pub time_remaining: Option<Duration>,
    output: O,
}

impl<O: Output> ReviewState<O> {
    pub fn new(sheet: Sheet, token: Token, time_remaining: Option<Duration>, output: O) -> Self {
        ReviewState {
            sheet,
            token,
            reveal_answers: false,
            time_remaining,
            output,
        }
    }

    pub fn toggle_reveal(&mut self) -> bool {
        self.reveal_answers = !self.reveal_answers;
        self.output
            .say(&Message::AnswersRevealed(self.reveal_answers));
        self.reveal_answers
    }
}

impl<O: Output> State for ReviewState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizSubmitted(self.sheet.score()));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
