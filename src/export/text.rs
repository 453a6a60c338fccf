use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use unidecode::unidecode;

use crate::error::{Error, Result};
use crate::export::{DocumentExporter, ScoreSummary};
use crate::quiz::definition::Quiz;
use crate::quiz::mode::Mode;

lazy_static! {
    static ref FORBIDDEN_FILE_NAME_CHARACTERS_REGEX: Regex = Regex::new("[^A-Za-z0-9_-]+").unwrap();
}

const RULE_WIDTH: usize = 60;

/// Turns an article title into something safe to use as a file name.
pub fn file_stem(title: &str) -> String {
    let title = unidecode(title);
    let stem = FORBIDDEN_FILE_NAME_CHARACTERS_REGEX.replace_all(title.trim(), "_");
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "quiz".to_owned()
    } else {
        stem.to_owned()
    }
}

pub fn render_report(quiz: &Quiz, score: &ScoreSummary, mode: Mode) -> String {
    let mut report = String::new();
    writeln!(report, "AI Wiki Quiz Generator").ok();
    writeln!(report).ok();
    writeln!(report, "Topic: {}", quiz.title).ok();
    writeln!(report, "Mode: {}", mode.as_str().to_uppercase()).ok();
    writeln!(
        report,
        "Score: {}/{} ({}%)",
        score.correct, score.total, score.accuracy
    )
    .ok();
    writeln!(report).ok();

    for (i, question) in quiz.get_questions().iter().enumerate() {
        writeln!(report, "Q{}. {}", i + 1, question.text).ok();
        for option in &question.options {
            writeln!(report, "    - {}", option).ok();
        }
        writeln!(report, "    Correct Answer: {}", question.correct_answer).ok();
        writeln!(report, "{}", "-".repeat(RULE_WIDTH)).ok();
    }
    report
}

/// Writes a plain text report of a finished quiz into a directory.
pub struct TextExporter {
    directory: PathBuf,
}

impl TextExporter {
    pub fn new(directory: &Path) -> Self {
        TextExporter {
            directory: directory.to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn report_path(&self, quiz: &Quiz) -> PathBuf {
        self.directory
            .join(format!("{}-quiz.txt", file_stem(&quiz.title)))
    }
}

impl DocumentExporter for TextExporter {
    fn export(&self, quiz: &Quiz, score: &ScoreSummary, mode: Mode) -> Result<()> {
        let path = self.report_path(quiz);
        fs::create_dir_all(&self.directory)
            .and_then(|_| fs::write(&path, render_report(quiz, score, mode)))
            .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))?;
        info!("Exported quiz report to {}", path.display());
        Ok(())
    }
}
