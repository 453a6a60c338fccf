use anyhow::{Context, Result};
use log::info;

use wiki_quiz::service::http::HttpQuizService;
use wiki_quiz::settings::Settings;
use wiki_quiz::shell::Shell;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::from_env().context("Invalid configuration")?;
    info!("Using quiz service at {}", settings.service_url);

    let service = HttpQuizService::new(&settings.service_url);
    let mut shell = Shell::new(service, settings);
    shell.run()
}
