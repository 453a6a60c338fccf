use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::export::{DocumentExporter, ScoreSummary};
use crate::quiz::definition::Quiz;
use crate::quiz::mode::Mode;

#[derive(Clone, Default)]
pub struct MockExporter {
    exports: Arc<RwLock<Vec<(String, ScoreSummary, Mode)>>>,
    failing: bool,
}

impl MockExporter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn failing() -> Self {
        MockExporter {
            failing: true,
            ..Default::default()
        }
    }

    pub fn exports(&self) -> Vec<(String, ScoreSummary, Mode)> {
        self.exports.read().clone()
    }
}

impl DocumentExporter for MockExporter {
    fn export(&self, quiz: &Quiz, score: &ScoreSummary, mode: Mode) -> Result<()> {
        if self.failing {
            return Err(Error::Export("disk full".to_owned()));
        }
        self.exports
            .write()
            .push((quiz.title.clone(), *score, mode));
        Ok(())
    }
}
