use crate::error::Result;
use crate::quiz::definition::Quiz;
use crate::quiz::mode::Mode;

#[cfg(test)]
pub mod mock;
pub mod text;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    pub accuracy: u32,
}

pub trait DocumentExporter {
    fn export(&self, quiz: &Quiz, score: &ScoreSummary, mode: Mode) -> Result<()>;
}
