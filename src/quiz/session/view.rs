use crate::quiz::definition::Difficulty;
use crate::quiz::mode::Mode;
use crate::quiz::score::Score;
use crate::quiz::session::SessionPhase;

/// Read-only snapshot of a session, with the reveal policy already applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub sheet: Option<SheetView>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SheetView {
    pub title: String,
    pub summary: String,
    pub cached: bool,
    pub related_topics: Vec<String>,
    pub mode: Mode,
    pub submitted: bool,
    pub reveal_answers: bool,
    pub time_remaining_seconds: Option<u64>,
    pub score: Score,
    pub questions: Vec<QuestionView>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    pub selected: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}
