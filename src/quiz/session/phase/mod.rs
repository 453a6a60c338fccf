use std::collections::HashMap;

use crate::quiz::definition::Quiz;
use crate::quiz::mode::Mode;
use crate::quiz::score::Score;

mod active;
mod generating;
mod idle;
mod review;

pub use self::active::*;
pub use self::generating::*;
pub use self::idle::*;
pub use self::review::*;

/// The quiz being taken, the mode it is taken in and the answers given so far.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub quiz: Quiz,
    pub mode: Mode,
    pub answers: HashMap<usize, String>,
}

impl Sheet {
    pub fn new(quiz: Quiz, mode: Mode) -> Self {
        Sheet {
            quiz,
            mode,
            answers: HashMap::new(),
        }
    }

    pub fn score(&self) -> Score {
        Score::compute(&self.quiz, &self.answers)
    }
}
