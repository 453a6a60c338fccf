use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Assisted,
    Strict,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Assisted
    }
}

impl Mode {
    pub fn is_timed(self) -> bool {
        match self {
            Mode::Assisted => false,
            Mode::Strict => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Assisted => "assisted",
            Mode::Strict => "strict",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_ref() {
            "assisted" => Ok(Mode::Assisted),
            "strict" => Ok(Mode::Strict),
            other => Err(format!("Unknown mode `{}`, expected assisted or strict", other)),
        }
    }
}

/// Whether the correct answer of a question is shown.
pub fn is_answer_visible(mode: Mode, submitted: bool, reveal_answers: bool) -> bool {
    match (mode, submitted, reveal_answers) {
        (Mode::Assisted, _, _) => true,
        (Mode::Strict, false, _) => false,
        (Mode::Strict, true, reveal_answers) => reveal_answers,
    }
}
