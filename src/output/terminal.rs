use itertools::Itertools;
use std::fmt::Write as _;

use crate::history::{HistoryDetail, HistoryPageState};
use crate::output::{Message, Output};
use crate::quiz::session::{SessionPhase, SessionView};

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }
}

pub fn option_label(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        AnswersRevealed(true) => "Answers are now shown.".into(),
        AnswersRevealed(false) => "Answers are now hidden.".into(),
        QuizReady(title, question_count, mode, cached) => format!(
            "📘 Quiz ready: {} ({} questions, {} mode{}). Type `show` to see it.",
            title,
            question_count,
            mode,
            if *cached { ", cached" } else { "" }
        ),
        QuizSubmitted(score) => format!(
            "Quiz submitted. Score: {}/{} ({}%)",
            score.correct,
            score.total,
            score.accuracy()
        ),
        TimeRemaining(duration) => format!("⏱ {} seconds left!", duration.as_secs()),
        TimeUp => "⏱ Time is up! Your answers were submitted.".into(),
    }
}

pub fn render_session(view: &SessionView) -> String {
    let sheet = match &view.sheet {
        Some(sheet) => sheet,
        None => {
            return match view.phase {
                SessionPhase::Generating => "Generating...".into(),
                _ => "No quiz yet. Use `generate <wikipedia url>`.".into(),
            }
        }
    };

    let mut text = String::new();
    write!(text, "{}", sheet.title).ok();
    if sheet.cached {
        write!(text, " [cached]").ok();
    }
    writeln!(text).ok();
    if !sheet.summary.is_empty() {
        writeln!(text, "{}", sheet.summary).ok();
    }
    writeln!(text, "Mode: {}", sheet.mode.as_str().to_uppercase()).ok();
    if let (false, Some(seconds)) = (sheet.submitted, sheet.time_remaining_seconds) {
        writeln!(text, "⏱ Time left: {}s", seconds).ok();
    }
    if sheet.submitted {
        writeln!(text, "Score: {}/{}", sheet.score.correct, sheet.score.total).ok();
    }
    writeln!(text).ok();

    for question in &sheet.questions {
        writeln!(
            text,
            "{}. {} ({})",
            question.number, question.text, question.difficulty
        )
        .ok();
        for (i, option) in question.options.iter().enumerate() {
            let marker = if question.selected.as_deref() == Some(option.as_str()) {
                "●"
            } else {
                "○"
            };
            writeln!(text, "   {} {}) {}", marker, option_label(i), option).ok();
        }
        if let Some(answer) = &question.correct_answer {
            writeln!(text, "   Answer: {}", answer).ok();
        }
        if let Some(explanation) = &question.explanation {
            writeln!(text, "   {}", explanation).ok();
        }
    }

    if !sheet.related_topics.is_empty() {
        writeln!(text).ok();
        writeln!(text, "Related: {}", sheet.related_topics.iter().join(", ")).ok();
    }
    text
}

pub fn render_history(page: &HistoryPageState) -> String {
    let mut text = String::new();
    writeln!(text, "📚 Quiz history, page {}", page.page_number).ok();
    if page.items.is_empty() {
        writeln!(text, "No quiz history found.").ok();
    }
    for entry in &page.items {
        writeln!(text, "[{}] {}", entry.id, entry.title).ok();
        if !entry.summary.is_empty() {
            writeln!(text, "    {}", entry.summary).ok();
        }
    }
    let navigation = [(page.has_previous(), "`prev`"), (page.has_next(), "`next`")]
        .iter()
        .filter(|(available, _)| *available)
        .map(|(_, command)| *command)
        .join(" / ");
    if !navigation.is_empty() {
        writeln!(text, "More: {}", navigation).ok();
    }
    text
}

pub fn render_detail(detail: &HistoryDetail) -> String {
    let mut text = String::new();
    writeln!(text, "{}", detail.title).ok();
    for (i, question) in detail.questions.iter().enumerate() {
        writeln!(text, "Q{}: {}", i + 1, question.text).ok();
        for option in &question.options {
            writeln!(text, "   - {}", option).ok();
        }
        writeln!(text, "   Answer: {}", question.correct_answer).ok();
        writeln!(text, "   Difficulty: {}", question.difficulty).ok();
        if !question.explanation.is_empty() {
            writeln!(text, "   Explanation: {}", question.explanation).ok();
        }
    }
    text
}

impl Output for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", interpret_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::definition::Difficulty;
    use crate::quiz::mode::Mode;
    use crate::quiz::score::Score;
    use crate::quiz::session::{QuestionView, SheetView};
    use crate::service::{EntryId, HistoryEntry};

    fn view(submitted: bool, correct_answer: Option<String>) -> SessionView {
        SessionView {
            phase: if submitted {
                SessionPhase::Submitted
            } else {
                SessionPhase::Active
            },
            sheet: Some(SheetView {
                title: "Rust".to_owned(),
                summary: String::new(),
                cached: true,
                related_topics: vec!["Cargo".to_owned(), "LLVM".to_owned()],
                mode: Mode::Strict,
                submitted,
                reveal_answers: false,
                time_remaining_seconds: Some(42),
                score: Score { correct: 0, total: 1 },
                questions: vec![QuestionView {
                    number: 1,
                    text: "Who started Rust?".to_owned(),
                    options: vec!["Graydon Hoare".to_owned(), "Linus Torvalds".to_owned()],
                    difficulty: Difficulty::Hard,
                    selected: Some("Linus Torvalds".to_owned()),
                    correct_answer,
                    explanation: None,
                }],
            }),
        }
    }

    #[test]
    fn renders_active_strict_quiz() {
        let text = render_session(&view(false, None));
        assert!(text.starts_with("Rust [cached]\n"));
        assert!(text.contains("⏱ Time left: 42s"));
        assert!(text.contains("1. Who started Rust? (hard)"));
        assert!(text.contains("● b) Linus Torvalds"));
        assert!(!text.contains("Answer:"));
        assert!(text.contains("Related: Cargo, LLVM"));
    }

    #[test]
    fn renders_submitted_quiz() {
        let text = render_session(&view(true, Some("Graydon Hoare".to_owned())));
        assert!(!text.contains("Time left"));
        assert!(text.contains("Score: 0/1"));
        assert!(text.contains("Answer: Graydon Hoare"));
    }

    #[test]
    fn renders_history_navigation() {
        let mut page = HistoryPageState {
            items: vec![HistoryEntry {
                id: EntryId(4),
                title: "Rust".to_owned(),
                summary: "A language.".to_owned(),
                serialized_quiz: "[]".to_owned(),
            }],
            page_number: 2,
            page_size: 5,
            loading: false,
        };
        let text = render_history(&page);
        assert!(text.contains("[4] Rust"));
        assert!(text.contains("More: `prev`\n"));

        page.items.clear();
        page.page_number = 1;
        assert!(render_history(&page).contains("No quiz history found."));
    }

    #[test]
    fn labels_options_with_letters() {
        assert_eq!(option_label(0), 'a');
        assert_eq!(option_label(3), 'd');
    }
}
