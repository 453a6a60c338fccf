use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

fn difficulty_from_string<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?
        .trim()
        .to_lowercase()
        .as_ref()
    {
        "easy" => Ok(Difficulty::Easy),
        "medium" | "" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"easy, medium, hard or blank",
        )),
    }
}

/// Question as produced by the generator and stored in history blobs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RawQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, deserialize_with = "difficulty_from_string")]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        if raw_question.options.len() < 2 {
            return Err(format!(
                "question \"{}\" needs at least two options",
                raw_question.question
            ));
        }

        let mut seen = HashSet::new();
        if !raw_question.options.iter().all(|o| seen.insert(o.as_str())) {
            return Err(format!(
                "question \"{}\" has duplicate options",
                raw_question.question
            ));
        }

        if !raw_question.options.contains(&raw_question.answer) {
            return Err(format!(
                "answer of question \"{}\" is not one of its options",
                raw_question.question
            ));
        }

        Ok(Question {
            text: raw_question.question,
            options: raw_question.options,
            correct_answer: raw_question.answer,
            difficulty: raw_question.difficulty,
            explanation: raw_question.explanation,
        })
    }
}
