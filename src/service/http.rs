use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ureq::Agent;

use crate::error::{Error, Result};
use crate::quiz::definition::{Quiz, RawQuestion};
use crate::quiz::mode::Mode;
use crate::service::{EntryId, HistoryEntry, QuizService};

const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct GenerateRequest<'a> {
    url: &'a str,
    mode: Mode,
}

#[derive(Deserialize)]
struct GenerateResponse {
    title: String,
    #[serde(default)]
    summary: Option<String>,
    quiz: Vec<RawQuestion>,
    #[serde(default)]
    related_topics: Vec<String>,
    #[serde(default)]
    cached: bool,
}

#[derive(Deserialize)]
struct HistoryResponse {
    data: Vec<ArticleRecord>,
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: i64,
    title: String,
    #[serde(default)]
    summary: Option<String>,
    quiz: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

fn quiz_from_response(response: GenerateResponse) -> Result<Quiz> {
    let mut quiz = Quiz::from_raw_questions(response.title, response.quiz)
        .map_err(|e| Error::Generation(format!("Invalid quiz returned by the server: {}", e)))?;
    if quiz.len() == 0 {
        return Err(Error::Generation(
            "Invalid quiz returned by the server: no questions".to_owned(),
        ));
    }
    quiz.summary = response.summary.unwrap_or_default();
    quiz.related_topics = response.related_topics;
    quiz.cached = response.cached;
    Ok(quiz)
}

fn entry_from_record(record: ArticleRecord) -> HistoryEntry {
    HistoryEntry {
        id: EntryId(record.id),
        title: record.title,
        summary: record.summary.unwrap_or_default(),
        serialized_quiz: record.quiz,
    }
}

/// Extracts the server's `detail` message from an error body.
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.detail);
    match detail {
        Some(serde_json::Value::String(message)) => message,
        Some(other) => other.to_string(),
        None => "API error".to_owned(),
    }
}

pub struct HttpQuizService {
    agent: Agent,
    base_url: String,
}

impl HttpQuizService {
    pub fn new(base_url: &str) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(GENERATION_TIMEOUT))
            .build();
        HttpQuizService {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl QuizService for HttpQuizService {
    fn generate(&self, url: &str, mode: Mode) -> Result<Quiz> {
        let endpoint = self.endpoint("/generate-quiz");
        debug!("POST {}", endpoint);
        let mut response = self
            .agent
            .post(&endpoint)
            .send_json(&GenerateRequest { url, mode })
            .map_err(|e| Error::Generation(format!("Could not reach the quiz service: {}", e)))?;

        if !response.status().is_success() {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            warn!("Quiz generation answered {}", response.status());
            return Err(Error::Generation(error_detail(&body)));
        }

        let body: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| Error::Generation(format!("Unexpected response from the quiz service: {}", e)))?;
        quiz_from_response(body)
    }

    fn fetch_history_page(&self, page: u32, page_size: u32) -> Result<Vec<HistoryEntry>> {
        let failure = || Error::Fetch("Failed to fetch history".to_owned());
        let endpoint = self.endpoint("/history");
        debug!("GET {} page={} limit={}", endpoint, page, page_size);
        let mut response = self
            .agent
            .get(&endpoint)
            .query("page", page.to_string())
            .query("limit", page_size.to_string())
            .call()
            .map_err(|e| {
                warn!("History request failed: {}", e);
                failure()
            })?;
        if !response.status().is_success() {
            warn!("History request answered {}", response.status());
            return Err(failure());
        }
        let body: HistoryResponse = response.body_mut().read_json().map_err(|e| {
            warn!("Unexpected history payload: {}", e);
            failure()
        })?;
        Ok(body.data.into_iter().map(entry_from_record).collect())
    }

    fn delete_entry(&self, id: EntryId) -> Result<()> {
        let endpoint = self.endpoint(&format!("/history/{}", id));
        debug!("DELETE {}", endpoint);
        match self.agent.delete(&endpoint).call() {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                warn!("Deleting quiz {} answered {}", id, response.status());
                Err(Error::Delete("Failed to delete quiz".to_owned()))
            }
            Err(e) => {
                warn!("Deleting quiz {} failed: {}", id, e);
                Err(Error::Delete("Failed to delete quiz".to_owned()))
            }
        }
    }

    fn delete_all_entries(&self) -> Result<()> {
        let endpoint = self.endpoint("/history");
        debug!("DELETE {}", endpoint);
        match self.agent.delete(&endpoint).call() {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                warn!("Deleting all quizzes answered {}", response.status());
                Err(Error::Delete("Failed to delete all quizzes".to_owned()))
            }
            Err(e) => {
                warn!("Deleting all quizzes failed: {}", e);
                Err(Error::Delete("Failed to delete all quizzes".to_owned()))
            }
        }
    }
}
