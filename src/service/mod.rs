use std::fmt;

use crate::error::Result;
use crate::quiz::definition::Quiz;
use crate::quiz::mode::Mode;

pub mod http;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A previously generated quiz as stored by the server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub title: String,
    pub summary: String,
    pub serialized_quiz: String,
}

pub trait QuizService: Send + Sync {
    fn generate(&self, url: &str, mode: Mode) -> Result<Quiz>;

    fn fetch_history_page(&self, page: u32, page_size: u32) -> Result<Vec<HistoryEntry>>;

    fn delete_entry(&self, id: EntryId) -> Result<()>;

    fn delete_all_entries(&self) -> Result<()>;
}
