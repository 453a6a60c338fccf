use log::{debug, warn};
use std::cell::Cell;
use std::convert::TryFrom;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::quiz::definition::{parse_questions, Question};
use crate::service::{EntryId, HistoryEntry, QuizService};


/// A history entry expanded into its full question set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryDetail {
    pub id: EntryId,
    pub title: String,
    pub questions: Vec<Question>,
}

/// Read-only snapshot of the page on display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryPageState {
    pub items: Vec<HistoryEntry>,
    pub page_number: u32,
    pub page_size: u32,
    pub loading: bool,
}

impl HistoryPageState {
    /// A short page means the server has nothing further.
    pub fn has_next(&self) -> bool {
        self.items.len() == self.page_size as usize
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// One page of past quizzes, kept consistent with the server by reloading after every mutation.
pub struct HistoryList<S: QuizService + ?Sized> {
    service: Arc<S>,
    items: Vec<HistoryEntry>,
    page_number: u32,
    page_size: u32,
    loading: Cell<bool>,
    detail: Option<HistoryDetail>,
}

impl<S: QuizService + ?Sized> HistoryList<S> {
    pub fn new(service: Arc<S>, page_size: u32) -> Self {
        HistoryList {
            service,
            items: Vec::new(),
            page_number: 1,
            page_size,
            loading: Cell::new(false),
            detail: None,
        }
    }

    pub fn items(&self) -> &Vec<HistoryEntry> {
        &self.items
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn page_state(&self) -> HistoryPageState {
        HistoryPageState {
            items: self.items.clone(),
            page_number: self.page_number,
            page_size: self.page_size,
            loading: self.is_loading(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.items.len() == self.page_size as usize
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn find(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn load_page(&mut self, page: u32) -> Result<()> {
        let page = page.max(1);
        self.loading.set(true);
        let _loading = scopeguard::guard(&self.loading, |loading| loading.set(false));

        let items = self
            .service
            .fetch_history_page(page, self.page_size)
            .map_err(|e| {
                warn!("Could not load history page {}: {}", page, e);
                e
            })?;
        debug!("Loaded {} history entries on page {}", items.len(), page);
        self.items = items;
        self.page_number = page;
        Ok(())
    }

    pub fn reload(&mut self) -> Result<()> {
        self.load_page(self.page_number)
    }

    /// Moves by `delta` pages. Only the lower bound is enforced: pages past the end load empty.
    pub fn go_to_page(&mut self, delta: i64) -> Result<()> {
        let target = i64::from(self.page_number).saturating_add(delta).max(1);
        self.load_page(u32::try_from(target).unwrap_or(u32::MAX))
    }

    /// Deletes one entry then reloads the current page, which may pull up an entry from the
    /// next page.
    pub fn delete_one(&mut self, id: EntryId) -> Result<()> {
        self.service.delete_entry(id)?;
        if self.detail.as_ref().map_or(false, |d| d.id == id) {
            self.detail = None;
        }
        // The entry is gone server side even if the reload below fails.
        self.items.retain(|e| e.id != id);
        self.reload()
    }

    /// Once the server has accepted the delete the list is on an empty first page, whether or
    /// not the reload succeeds.
    pub fn delete_all(&mut self) -> Result<()> {
        self.service.delete_all_entries()?;
        self.detail = None;
        self.items.clear();
        self.page_number = 1;
        self.load_page(1)
    }

    pub fn detail(&self) -> Option<&HistoryDetail> {
        self.detail.as_ref()
    }

    pub fn select_detail(&mut self, entry: &HistoryEntry) -> Result<&HistoryDetail> {
        self.detail = None;
        let questions = parse_questions(&entry.serialized_quiz).map_err(|e| {
            warn!("History entry {} holds a malformed quiz: {}", entry.id, e);
            Error::MalformedHistory(e)
        })?;
        let detail: &HistoryDetail = self.detail.get_or_insert(HistoryDetail {
            id: entry.id,
            title: entry.title.clone(),
            questions,
        });
        Ok(detail)
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
