use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::quiz::mode::Mode;
use crate::service::EntryId;

pub mod history;
pub mod quiz;

lazy_static! {
    static ref ANSWER_ARGS_REGEX: Regex = Regex::new(r"^(\d+)\s+(.+)$").unwrap();
}

pub const HELP: &'static str = "Commands:
  mode <assisted|strict>     choose the mode of the next quiz
  generate <wikipedia url>   generate a quiz from an article
  answer <question> <option> answer a question, by option letter or text
  submit                     submit your answers
  reveal                     show or hide answers after a strict quiz
  export                     write a report of the submitted quiz
  show                       print the current quiz
  history                    list past quizzes
  next | prev                browse history pages
  details <id>               show the questions of a past quiz
  close                      close the details view
  delete <id>                delete a past quiz
  delete-all                 delete every past quiz
  help                       print this message
  quit                       leave";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Mode(Mode),
    Generate(String),
    Answer(usize, String),
    Submit,
    Reveal,
    Export,
    Show,
    History,
    NextPage,
    PreviousPage,
    Details(EntryId),
    Close,
    Delete(EntryId),
    DeleteAll,
    Help,
    Quit,
}

fn parse_entry_id(args: &str) -> Result<EntryId> {
    let id = args
        .trim()
        .parse()
        .with_context(|| format!("`{}` is not a quiz id", args.trim()))?;
    Ok(EntryId(id))
}

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (name, args) = match line.find(char::is_whitespace) {
        Some(index) => (&line[..index], line[index..].trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_ref() {
        "mode" => Command::Mode(args.parse().map_err(|e: String| anyhow!(e))?),
        "generate" => {
            if args.is_empty() {
                return Err(anyhow!("Please enter a Wikipedia URL"));
            }
            Command::Generate(args.to_owned())
        }
        "answer" => {
            let captures = ANSWER_ARGS_REGEX
                .captures(args)
                .context("Usage: answer <question number> <option>")?;
            let number: usize = captures[1].parse()?;
            if number == 0 {
                return Err(anyhow!("Questions are numbered from 1"));
            }
            Command::Answer(number - 1, captures[2].trim().to_owned())
        }
        "submit" => Command::Submit,
        "reveal" => Command::Reveal,
        "export" => Command::Export,
        "show" => Command::Show,
        "history" => Command::History,
        "next" => Command::NextPage,
        "prev" | "previous" => Command::PreviousPage,
        "details" => Command::Details(parse_entry_id(args)?),
        "close" => Command::Close,
        "delete" => Command::Delete(parse_entry_id(args)?),
        "delete-all" => Command::DeleteAll,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "" => return Err(anyhow!("Type `help` to list commands")),
        other => return Err(anyhow!("Unknown command `{}`, type `help` to list commands", other)),
    };
    Ok(command)
}
