use anyhow::{anyhow, Context, Result};
use std::thread;

use crate::output::terminal::{option_label, render_session};
use crate::quiz::mode::Mode;
use crate::quiz::session::SessionPhase;
use crate::service::QuizService;
use crate::shell::Shell;
use crate::timer::schedule_ticks;

/// Accepts an option letter (`b`) or the option text, ignoring case.
fn resolve_option(options: &[String], choice: &str) -> Option<String> {
    let choice = choice.trim();
    let by_label = options
        .iter()
        .enumerate()
        .find(|(i, _)| choice.len() == 1 && choice.eq_ignore_ascii_case(&option_label(*i).to_string()));
    if let Some((_, option)) = by_label {
        return Some(option.clone());
    }
    options
        .iter()
        .find(|o| o.to_lowercase() == choice.to_lowercase())
        .cloned()
}

pub fn set_mode<S: QuizService + 'static>(shell: &mut Shell<S>, mode: Mode) {
    shell.mode = mode;
    let mut session = shell.session.lock();
    if session.phase() == SessionPhase::Generating {
        session.reset();
        println!("Pending quiz generation cancelled.");
    }
    println!("Next quiz will use {} mode.", mode);
}

pub fn generate<S: QuizService + 'static>(shell: &mut Shell<S>, url: &str) -> Result<()> {
    let url = url.trim().to_owned();
    let mode = shell.mode;
    let ticket = shell.session.lock().start(&url, mode)?;
    println!("Generating...");

    let session = shell.session.clone();
    let service = shell.service.clone();
    let interval = shell.settings.tick_interval;
    thread::spawn(move || {
        let result = service.generate(&url, mode);
        let countdown = {
            let mut guard = session.lock();
            match guard.complete_generation(ticket, result) {
                Ok(true) => guard.countdown_token(),
                Ok(false) => None,
                Err(e) => {
                    eprintln!("{}", e);
                    None
                }
            }
        };
        if let Some(token) = countdown {
            schedule_ticks(session, token, interval);
        }
    });
    Ok(())
}

pub fn answer<S: QuizService + 'static>(shell: &mut Shell<S>, index: usize, choice: &str) -> Result<()> {
    // Held across the check and the write so the countdown cannot submit in between.
    let mut session = shell.session.lock();
    let view = session.view();
    let sheet = view.sheet.context("There is no quiz in progress")?;
    if sheet.submitted {
        return Err(anyhow!("Answers are locked once the quiz is submitted"));
    }
    let question = sheet
        .questions
        .get(index)
        .with_context(|| format!("There is no question {}", index + 1))?;
    let option = resolve_option(&question.options, choice)
        .with_context(|| format!("`{}` is not an option of question {}", choice, index + 1))?;
    if !session.select_answer(index, &option) {
        return Err(anyhow!("Answers are locked once the quiz is submitted"));
    }
    println!("Question {}: {}", index + 1, option);
    Ok(())
}

pub fn submit<S: QuizService + 'static>(shell: &mut Shell<S>) -> Result<()> {
    shell.session.lock().submit()?;
    Ok(())
}

pub fn reveal<S: QuizService + 'static>(shell: &mut Shell<S>) -> Result<()> {
    let revealed = shell.session.lock().toggle_reveal()?;
    if revealed {
        show(shell);
    }
    Ok(())
}

pub fn export<S: QuizService + 'static>(shell: &mut Shell<S>) -> Result<()> {
    shell.session.lock().export(&shell.exporter)?;
    println!("📄 Report saved in {}", shell.exporter.directory().display());
    Ok(())
}

pub fn show<S: QuizService + 'static>(shell: &mut Shell<S>) {
    let view = shell.session.lock().view();
    println!("{}", render_session(&view));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::definition::{Quiz, RawQuestion};
    use crate::service::mock::MockQuizService;
    use crate::settings::Settings;

    fn shell_with_quiz() -> Shell<MockQuizService> {
        let shell = Shell::new(MockQuizService::new(), Settings::default());
        let quiz = Quiz::from_raw_questions(
            "Paris".to_owned(),
            vec![RawQuestion {
                question: "Capital of France?".to_owned(),
                options: vec!["Paris".to_owned(), "Rome".to_owned()],
                answer: "Paris".to_owned(),
                difficulty: Default::default(),
                explanation: String::new(),
            }],
        )
        .unwrap();
        {
            let mut session = shell.session.lock();
            let ticket = session
                .start("https://en.wikipedia.org/wiki/Paris", Mode::Assisted)
                .unwrap();
            assert!(session.complete_generation(ticket, Ok(quiz)).unwrap());
        }
        shell
    }

    #[test]
    fn answer_is_recorded() {
        let mut shell = shell_with_quiz();
        answer(&mut shell, 0, "b").unwrap();
        let session = shell.session.lock();
        assert_eq!(
            session.answers().unwrap().get(&0).map(String::as_str),
            Some("Rome")
        );
    }

    #[test]
    fn answer_after_submission_is_refused() {
        let mut shell = shell_with_quiz();
        shell.session.lock().submit().unwrap();
        assert!(answer(&mut shell, 0, "a").is_err());
        assert!(shell.session.lock().answers().unwrap().is_empty());
    }

    fn options() -> Vec<String> {
        vec!["Paris".to_owned(), "Rome".to_owned(), "B".to_owned()]
    }

    #[test]
    fn resolves_option_letters() {
        assert_eq!(resolve_option(&options(), "b"), Some("Rome".to_owned()));
        assert_eq!(resolve_option(&options(), "A"), Some("Paris".to_owned()));
    }

    #[test]
    fn resolves_option_text() {
        assert_eq!(resolve_option(&options(), "rome"), Some("Rome".to_owned()));
        assert_eq!(resolve_option(&options(), "Berlin"), None);
    }

    #[test]
    fn letter_outside_options_falls_back_to_text() {
        assert_eq!(resolve_option(&options(), "d"), None);
    }
}
