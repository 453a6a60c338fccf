use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::quiz::definition::{Quiz, RawQuestion};
use crate::quiz::mode::Mode;
use crate::service::{EntryId, HistoryEntry, QuizService};

/// In-memory stand-in for the quiz backend. History is kept newest first, like the server.
#[derive(Clone)]
pub struct MockQuizService {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
    generated: Arc<RwLock<Result<Quiz>>>,
    generate_requests: Arc<RwLock<Vec<(String, Mode)>>>,
    fail_fetch: Arc<RwLock<bool>>,
    fail_delete: Arc<RwLock<bool>>,
}

impl MockQuizService {
    pub fn new() -> Self {
        MockQuizService {
            entries: Arc::new(RwLock::new(Vec::new())),
            generated: Arc::new(RwLock::new(Err(Error::Generation("API error".to_owned())))),
            generate_requests: Arc::new(RwLock::new(Vec::new())),
            fail_fetch: Arc::new(RwLock::new(false)),
            fail_delete: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_entries(count: i64) -> Self {
        let service = Self::new();
        for id in 1..=count {
            service.add_entry(id);
        }
        service
    }

    pub fn add_entry(&self, id: i64) {
        let question = RawQuestion {
            question: format!("Question of quiz {}?", id),
            options: vec!["yes".to_owned(), "no".to_owned()],
            answer: "yes".to_owned(),
            difficulty: Default::default(),
            explanation: String::new(),
        };
        let serialized_quiz = serde_json::to_string(&vec![question]).unwrap();
        self.add_raw_entry(id, serialized_quiz);
    }

    pub fn add_raw_entry(&self, id: i64, serialized_quiz: String) {
        self.entries.write().insert(
            0,
            HistoryEntry {
                id: EntryId(id),
                title: format!("Article {}", id),
                summary: format!("Summary of article {}", id),
                serialized_quiz,
            },
        );
    }

    pub fn set_generated(&self, result: Result<Quiz>) {
        *self.generated.write() = result;
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.write() = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        *self.fail_delete.write() = fail;
    }

    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    pub fn generate_requests(&self) -> Vec<(String, Mode)> {
        self.generate_requests.read().clone()
    }
}

impl QuizService for MockQuizService {
    fn generate(&self, url: &str, mode: Mode) -> Result<Quiz> {
        self.generate_requests.write().push((url.to_owned(), mode));
        self.generated.read().clone()
    }

    fn fetch_history_page(&self, page: u32, page_size: u32) -> Result<Vec<HistoryEntry>> {
        if *self.fail_fetch.read() {
            return Err(Error::Fetch("Failed to fetch history".to_owned()));
        }
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        Ok(self
            .entries
            .read()
            .iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    fn delete_entry(&self, id: EntryId) -> Result<()> {
        if *self.fail_delete.read() {
            return Err(Error::Delete("Failed to delete quiz".to_owned()));
        }
        let mut entries = self.entries.write();
        let count_before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == count_before {
            return Err(Error::Delete("Quiz not found".to_owned()));
        }
        Ok(())
    }

    fn delete_all_entries(&self) -> Result<()> {
        if *self.fail_delete.read() {
            return Err(Error::Delete("Failed to delete all quizzes".to_owned()));
        }
        self.entries.write().clear();
        Ok(())
    }
}
