use log::warn;
use std::time::Duration;

use crate::output::{Message, Output};
use crate::quiz::session::phase::Sheet;
use crate::quiz::session::{State, Token};

#[derive(Clone, Debug)]
struct Countdown {
    time_elapsed: Duration,
    time_limit: Duration,
}

impl Countdown {
    fn time_remaining(&self) -> Duration {
        self.time_limit
            .checked_sub(self.time_elapsed)
            .unwrap_or_default()
    }
}

pub struct ActiveState<O: Output> {
    pub sheet: Sheet,
    pub token: Token,
    countdown: Option<Countdown>,
    output: O,
}

impl<O: Output> ActiveState<O> {
    pub fn new(sheet: Sheet, token: Token, time_limit: Option<Duration>, output: O) -> Self {
        ActiveState {
            sheet,
            token,
            countdown: time_limit.map(|time_limit| Countdown {
                time_elapsed: Duration::default(),
                time_limit,
            }),
            output,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn time_remaining(&self) -> Option<Duration> {
        self.countdown.as_ref().map(|c| c.time_remaining())
    }

    pub fn select_answer(&mut self, question_index: usize, option: &str) -> bool {
        match self.sheet.quiz.get_questions().get(question_index) {
            Some(question) if question.has_option(option) => {
                self.sheet
                    .answers
                    .insert(question_index, option.to_owned());
                true
            }
            Some(_) => {
                warn!(
                    "Ignoring answer `{}` which is not an option of question {}",
                    option,
                    question_index + 1
                );
                false
            }
            None => {
                warn!("Ignoring answer to unknown question {}", question_index + 1);
                false
            }
        }
    }

    fn print_time_remaining(&self, before: Duration, after: Duration) {
        let seconds_10 = Duration::from_secs(10);
        let seconds_30 = Duration::from_secs(30);
        let threshold_10 = before > seconds_10 && after <= seconds_10;
        let threshold_30 = before > seconds_30 && after <= seconds_30;
        if after.as_nanos() == 0 {
            return;
        }
        if threshold_10 {
            self.output.say(&Message::TimeRemaining(seconds_10));
        } else if threshold_30 {
            self.output.say(&Message::TimeRemaining(seconds_30));
        }
    }
}

/// Rounds up so that a fresh countdown reads its full limit and only reads zero once expired.
pub fn whole_seconds(duration: Duration) -> u64 {
    duration.as_secs() + if duration.subsec_nanos() > 0 { 1 } else { 0 }
}

impl<O: Output> State for ActiveState<O> {
    fn on_begin(&mut self) {
        let quiz = &self.sheet.quiz;
        self.output.say(&Message::QuizReady(
            quiz.title.clone(),
            quiz.len(),
            self.sheet.mode,
            quiz.cached,
        ));
    }

    fn on_tick(&mut self, dt: Duration) {
        let (before, after) = match self.countdown.as_mut() {
            Some(countdown) => {
                let before = countdown.time_remaining();
                countdown.time_elapsed += dt;
                (before, countdown.time_remaining())
            }
            None => return,
        };
        self.print_time_remaining(before, after);
    }

    fn on_end(&mut self) {
        if self.is_over() {
            self.output.say(&Message::TimeUp);
        }
    }

    fn is_over(&self) -> bool {
        match &self.countdown {
            Some(countdown) => countdown.time_elapsed >= countdown.time_limit,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::mock::MockOutput;
    use crate::quiz::definition::{Question, Quiz};
    use crate::quiz::mode::Mode;
    use std::convert::TryFrom;

    fn sheet(mode: Mode) -> Sheet {
        let question = Question::try_from(crate::quiz::definition::RawQuestion {
            question: "Q?".to_owned(),
            options: vec!["a".to_owned(), "b".to_owned()],
            answer: "a".to_owned(),
            difficulty: Default::default(),
            explanation: String::new(),
        })
        .unwrap();
        Sheet::new(Quiz::new("Title".to_owned(), vec![question]), mode)
    }

    fn timed_state(output: &MockOutput) -> ActiveState<MockOutput> {
        ActiveState::new(
            sheet(Mode::Strict),
            Token(1),
            Some(Duration::from_secs(60)),
            output.clone(),
        )
    }

    #[test]
    fn times_out_after_duration() {
        let output = MockOutput::new();
        let mut state = timed_state(&output);
        state.on_begin();
        assert!(!state.is_over());
        state.on_tick(Duration::from_secs(59));
        assert!(!state.is_over());
        state.on_tick(Duration::from_secs(1));
        assert!(state.is_over());
    }

    #[test]
    fn untimed_state_never_times_out() {
        let output = MockOutput::new();
        let mut state = ActiveState::new(sheet(Mode::Assisted), Token(1), None, output);
        state.on_tick(Duration::from_secs(3600));
        assert!(!state.is_over());
        assert_eq!(state.time_remaining(), None);
    }

    #[test]
    fn reports_whole_seconds_rounded_up() {
        assert_eq!(whole_seconds(Duration::from_secs(60)), 60);
        assert_eq!(whole_seconds(Duration::from_millis(59_500)), 60);
        assert_eq!(whole_seconds(Duration::from_millis(1)), 1);
        assert_eq!(whole_seconds(Duration::default()), 0);
    }

    #[test]
    fn announces_time_thresholds_once() {
        let output = MockOutput::new();
        let mut state = timed_state(&output);
        for _ in 0..59 {
            state.on_tick(Duration::from_secs(1));
        }
        let messages = output.flush();
        assert_eq!(
            messages,
            vec![
                Message::TimeRemaining(Duration::from_secs(30)),
                Message::TimeRemaining(Duration::from_secs(10)),
            ]
        );
    }

    #[test]
    fn announces_time_up_when_ending_expired() {
        let output = MockOutput::new();
        let mut state = timed_state(&output);
        state.on_tick(Duration::from_secs(60));
        output.flush();
        state.on_end();
        assert_eq!(output.flush(), vec![Message::TimeUp]);
    }

    #[test]
    fn ignores_options_not_offered() {
        let output = MockOutput::new();
        let mut state = timed_state(&output);
        assert!(!state.select_answer(0, "z"));
        assert!(!state.select_answer(5, "a"));
        assert!(state.sheet.answers.is_empty());
        assert!(state.select_answer(0, "b"));
        assert!(state.select_answer(0, "a"));
        assert_eq!(state.sheet.answers.get(&0).map(String::as_str), Some("a"));
    }
}
