use anyhow::{anyhow, Context, Result};

use crate::output::terminal::{render_detail, render_history};
use crate::service::{EntryId, QuizService};
use crate::shell::{confirm, Shell};

fn print_page<S: QuizService + 'static>(shell: &Shell<S>) {
    println!("{}", render_history(&shell.history.page_state()));
}

pub fn list<S: QuizService + 'static>(shell: &mut Shell<S>) -> Result<()> {
    shell
        .history
        .reload()
        .context("Failed to load history")?;
    print_page(shell);
    Ok(())
}

pub fn turn_page<S: QuizService + 'static>(shell: &mut Shell<S>, delta: i64) -> Result<()> {
    if delta > 0 && !shell.history.has_next() {
        return Err(anyhow!("This is the last page"));
    }
    if delta < 0 && !shell.history.has_previous() {
        return Err(anyhow!("This is the first page"));
    }
    shell
        .history
        .go_to_page(delta)
        .context("Failed to load history")?;
    print_page(shell);
    Ok(())
}

pub fn details<S: QuizService + 'static>(shell: &mut Shell<S>, id: EntryId) -> Result<()> {
    let entry = shell
        .history
        .find(id)
        .cloned()
        .with_context(|| format!("Quiz {} is not on this page, use `history` first", id))?;
    let detail = shell.history.select_detail(&entry)?;
    println!("{}", render_detail(detail));
    Ok(())
}

pub fn close<S: QuizService + 'static>(shell: &mut Shell<S>) {
    if let Some(detail) = shell.history.detail() {
        println!("Closed {}", detail.title);
    }
    shell.history.close_detail();
}

pub fn delete<S: QuizService + 'static>(shell: &mut Shell<S>, id: EntryId) -> Result<()> {
    if !confirm("Delete this quiz?")? {
        return Ok(());
    }
    shell.history.delete_one(id)?;
    print_page(shell);
    Ok(())
}

pub fn delete_all<S: QuizService + 'static>(shell: &mut Shell<S>) -> Result<()> {
    if !confirm("Delete ALL quizzes?")? {
        return Ok(());
    }
    shell.history.delete_all()?;
    print_page(shell);
    Ok(())
}
