use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Duration;

use self::phase::*;
use crate::error::{Error, Result};
use crate::export::{DocumentExporter, ScoreSummary};
use crate::output::Output;
use crate::quiz::definition::Quiz;
use crate::quiz::mode::{is_answer_visible, Mode};
use crate::quiz::score::Score;
use crate::service::QuizService;

mod phase;
pub mod view;


pub use self::view::{QuestionView, SessionView, SheetView};

const WIKIPEDIA_ARTICLE_MARKER: &'static str = "wikipedia.org/wiki/";

trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

/// Identifies one generation request and the session it produces. Results and ticks carrying
/// a token other than the current one are dropped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Token(u64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionPhase {
    Idle,
    Generating,
    Active,
    Submitted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    Running,
    Expired,
    Finished,
    Stale,
}

enum Phase<O: Output> {
    Idle(IdleState),
    Generating(GeneratingState),
    Active(ActiveState<O>),
    Submitted(ReviewState<O>),
}

impl<O: Output> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Idle(s) => s,
            Phase::Generating(s) => s,
            Phase::Active(s) => s,
            Phase::Submitted(s) => s,
        }
    }

    fn kind(&self) -> SessionPhase {
        match self {
            Phase::Idle(_) => SessionPhase::Idle,
            Phase::Generating(_) => SessionPhase::Generating,
            Phase::Active(_) => SessionPhase::Active,
            Phase::Submitted(_) => SessionPhase::Submitted,
        }
    }

    fn sheet(&self) -> Option<&Sheet> {
        match self {
            Phase::Active(s) => Some(&s.sheet),
            Phase::Submitted(s) => Some(&s.sheet),
            Phase::Idle(_) | Phase::Generating(_) => None,
        }
    }
}

pub struct QuizSession<O: Output + Clone> {
    current_phase: Phase<O>,
    last_token: u64,
    strict_time_limit: Duration,
    output: O,
}

impl<O: Output + Clone> QuizSession<O> {
    pub fn new(strict_time_limit: Duration, output: O) -> Self {
        QuizSession {
            current_phase: Phase::Idle(IdleState),
            last_token: 0,
            strict_time_limit,
            output,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        self.current_phase = phase;
        info!("Entering session phase: {:?}", self.current_phase.kind());
        self.current_phase.get_state().on_begin();
    }

    fn next_token(&mut self) -> Token {
        self.last_token += 1;
        Token(self.last_token)
    }

    pub fn phase(&self) -> SessionPhase {
        self.current_phase.kind()
    }

    /// Validates the article URL and begins a generation request, superseding any request
    /// still in flight.
    pub fn start(&mut self, url: &str, mode: Mode) -> Result<Token> {
        let url = url.trim();
        if !url.contains(WIKIPEDIA_ARTICLE_MARKER) {
            return Err(Error::Validation(
                "Please enter a valid Wikipedia article URL".to_owned(),
            ));
        }
        let token = self.next_token();
        let state = GeneratingState::new(token, url.to_owned(), mode);
        self.set_current_phase(Phase::Generating(state));
        Ok(token)
    }

    /// Applies the result of a generation request. Returns whether the result was applied,
    /// `false` meaning it belonged to a superseded request.
    pub fn complete_generation(&mut self, ticket: Token, result: Result<Quiz>) -> Result<bool> {
        let mode = match &self.current_phase {
            Phase::Generating(state) if state.token == ticket => state.mode,
            _ => {
                debug!("Dropping result of superseded request {:?}", ticket);
                return Ok(false);
            }
        };

        match result {
            Ok(quiz) => {
                let time_limit = if mode.is_timed() {
                    Some(self.strict_time_limit)
                } else {
                    None
                };
                let state =
                    ActiveState::new(Sheet::new(quiz, mode), ticket, time_limit, self.output.clone());
                self.set_current_phase(Phase::Active(state));
                Ok(true)
            }
            Err(e) => {
                warn!("Quiz generation failed: {}", e);
                self.set_current_phase(Phase::Idle(IdleState));
                Err(e)
            }
        }
    }

    pub fn generate<S: QuizService + ?Sized>(
        &mut self,
        service: &S,
        url: &str,
        mode: Mode,
    ) -> Result<()> {
        let ticket = self.start(url, mode)?;
        let result = service.generate(url.trim(), mode);
        self.complete_generation(ticket, result)?;
        Ok(())
    }

    /// Records an answer. Returns whether it was taken, which it is not once the quiz has been
    /// submitted or when the option does not belong to the question.
    pub fn select_answer(&mut self, question_index: usize, option: &str) -> bool {
        match &mut self.current_phase {
            Phase::Active(state) => state.select_answer(question_index, option),
            _ => {
                debug!("Ignoring answer outside of an active quiz");
                false
            }
        }
    }

    pub fn tick(&mut self, token: Token, dt: Duration) -> TickOutcome {
        let state = match &mut self.current_phase {
            Phase::Active(state) if state.token == token => state,
            Phase::Submitted(state) if state.token == token => return TickOutcome::Finished,
            _ => {
                debug!("Ignoring tick for superseded session {:?}", token);
                return TickOutcome::Stale;
            }
        };
        if !state.is_timed() {
            return TickOutcome::Finished;
        }
        state.on_tick(dt);
        if state.is_over() {
            self.submit_active();
            return TickOutcome::Expired;
        }
        TickOutcome::Running
    }

    pub fn submit(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Active(_) => {
                self.submit_active();
                Ok(())
            }
            Phase::Submitted(_) => Ok(()),
            _ => Err(Error::InvalidPhase("There is no quiz in progress")),
        }
    }

    fn submit_active(&mut self) {
        if let Phase::Active(state) = &self.current_phase {
            let review = ReviewState::new(
                state.sheet.clone(),
                state.token,
                state.time_remaining(),
                self.output.clone(),
            );
            self.set_current_phase(Phase::Submitted(review));
        }
    }

    pub fn toggle_reveal(&mut self) -> Result<bool> {
        match &mut self.current_phase {
            Phase::Submitted(state) if state.sheet.mode == Mode::Strict => {
                Ok(state.toggle_reveal())
            }
            Phase::Submitted(_) => Err(Error::InvalidPhase(
                "Answers are always shown in assisted mode",
            )),
            _ => Err(Error::InvalidPhase(
                "Answers can only be revealed after submitting",
            )),
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.current_phase.sheet().map(Sheet::score)
    }

    pub fn export<E: DocumentExporter + ?Sized>(&self, exporter: &E) -> Result<()> {
        match &self.current_phase {
            Phase::Submitted(state) => {
                let score = state.sheet.score();
                let summary = ScoreSummary {
                    correct: score.correct,
                    total: score.total,
                    accuracy: score.accuracy(),
                };
                exporter.export(&state.sheet.quiz, &summary, state.sheet.mode)
            }
            _ => Err(Error::InvalidPhase(
                "Submit the quiz before exporting it",
            )),
        }
    }

    /// Drops the current session. Pending generation results and timers become stale.
    pub fn reset(&mut self) {
        if self.phase() != SessionPhase::Idle {
            self.set_current_phase(Phase::Idle(IdleState));
        }
    }

    /// Token to tick with, if the current session runs a countdown.
    pub fn countdown_token(&self) -> Option<Token> {
        match &self.current_phase {
            Phase::Active(state) if state.is_timed() => Some(state.token),
            _ => None,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match &self.current_phase {
            Phase::Generating(state) => Some(state.mode),
            phase => phase.sheet().map(|s| s.mode),
        }
    }

    pub fn answers(&self) -> Option<&HashMap<usize, String>> {
        self.current_phase.sheet().map(|s| &s.answers)
    }

    pub fn is_submitted(&self) -> bool {
        self.phase() == SessionPhase::Submitted
    }

    pub fn reveal_answers(&self) -> bool {
        match &self.current_phase {
            Phase::Submitted(state) => state.reveal_answers,
            _ => false,
        }
    }

    pub fn time_remaining_seconds(&self) -> Option<u64> {
        let time_remaining = match &self.current_phase {
            Phase::Active(state) => state.time_remaining(),
            Phase::Submitted(state) => state.time_remaining,
            _ => None,
        };
        time_remaining.map(whole_seconds)
    }

    pub fn view(&self) -> SessionView {
        let sheet = match self.current_phase.sheet() {
            Some(sheet) => sheet,
            None => {
                return SessionView {
                    phase: self.phase(),
                    sheet: None,
                }
            }
        };
        let submitted = self.is_submitted();
        let reveal_answers = self.reveal_answers();
        let answer_visible = is_answer_visible(sheet.mode, submitted, reveal_answers);
        let questions = sheet
            .quiz
            .get_questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionView {
                number: i + 1,
                text: q.text.clone(),
                options: q.options.clone(),
                difficulty: q.difficulty,
                selected: sheet.answers.get(&i).cloned(),
                correct_answer: if answer_visible {
                    Some(q.correct_answer.clone())
                } else {
                    None
                },
                explanation: if answer_visible && !q.explanation.is_empty() {
                    Some(q.explanation.clone())
                } else {
                    None
                },
            })
            .collect();

        SessionView {
            phase: self.phase(),
            sheet: Some(SheetView {
                title: sheet.quiz.title.clone(),
                summary: sheet.quiz.summary.clone(),
                cached: sheet.quiz.cached,
                related_topics: sheet.quiz.related_topics.clone(),
                mode: sheet.mode,
                submitted,
                reveal_answers,
                time_remaining_seconds: self.time_remaining_seconds(),
                score: sheet.score(),
                questions,
            }),
        }
    }
}
