use std::convert::TryFrom;

pub mod question;

pub use question::{Difficulty, Question, RawQuestion};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quiz {
    pub title: String,
    pub summary: String,
    pub cached: bool,
    pub related_topics: Vec<String>,
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: String, questions: Vec<Question>) -> Self {
        Quiz {
            title,
            summary: String::new(),
            cached: false,
            related_topics: Vec::new(),
            questions,
        }
    }

    pub fn from_raw_questions(title: String, raw_questions: Vec<RawQuestion>) -> Result<Self, String> {
        let questions = raw_questions
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Quiz::new(title, questions))
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Parses a stored question list. Stored payloads may predate the current schema so every
/// question is validated rather than trusted.
pub fn parse_questions(serialized: &str) -> Result<Vec<Question>, String> {
    let raw_questions: Vec<RawQuestion> =
        serde_json::from_str(serialized).map_err(|e| e.to_string())?;
    raw_questions
        .into_iter()
        .map(Question::try_from)
        .collect()
}
