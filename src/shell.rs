use anyhow::Result;
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::commands::{self, Command, HELP};
use crate::export::text::TextExporter;
use crate::history::HistoryList;
use crate::output::terminal::TerminalOutput;
use crate::quiz::mode::Mode;
use crate::quiz::session::QuizSession;
use crate::service::QuizService;
use crate::settings::Settings;
use crate::timer::SessionHandle;

pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: QuizService + 'static> {
    pub session: SessionHandle<TerminalOutput>,
    pub history: HistoryList<S>,
    pub service: Arc<S>,
    pub exporter: TextExporter,
    pub settings: Settings,
    pub mode: Mode,
}

impl<S: QuizService + 'static> Shell<S> {
    pub fn new(service: S, settings: Settings) -> Self {
        let service = Arc::new(service);
        let session = QuizSession::new(settings.strict_time_limit, TerminalOutput::new());
        Shell {
            session: Arc::new(Mutex::new(session)),
            history: HistoryList::new(service.clone(), settings.history_page_size),
            service,
            exporter: TextExporter::new(&settings.export_dir),
            settings,
            mode: Mode::default(),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Mode(mode) => commands::quiz::set_mode(self, mode),
            Command::Generate(url) => commands::quiz::generate(self, &url)?,
            Command::Answer(index, option) => commands::quiz::answer(self, index, &option)?,
            Command::Submit => commands::quiz::submit(self)?,
            Command::Reveal => commands::quiz::reveal(self)?,
            Command::Export => commands::quiz::export(self)?,
            Command::Show => commands::quiz::show(self),
            Command::History => commands::history::list(self)?,
            Command::NextPage => commands::history::turn_page(self, 1)?,
            Command::PreviousPage => commands::history::turn_page(self, -1)?,
            Command::Details(id) => commands::history::details(self, id)?,
            Command::Close => commands::history::close(self),
            Command::Delete(id) => commands::history::delete(self, id)?,
            Command::DeleteAll => commands::history::delete_all(self)?,
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue)
    }

    pub fn run(&mut self) -> Result<()> {
        println!("AI Wiki Quiz Generator. Type `help` to list commands.");
        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let result = commands::parse(&line).and_then(|command| self.dispatch(command));
            match result {
                Ok(Flow::Continue) => (),
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => eprintln!("{:#}", e),
            }
        }
    }
}

/// Asks a yes/no question on the terminal. Anything but an explicit yes declines.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(match answer.trim().to_lowercase().as_ref() {
        "y" | "yes" => true,
        _ => false,
    })
}
