use anyhow::{anyhow, Context, Result};
use directories_next::UserDirs;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const ENV_SERVICE_URL: &'static str = "WIKI_QUIZ_SERVICE_URL";
const ENV_EXPORT_DIR: &'static str = "WIKI_QUIZ_EXPORT_DIR";
const ENV_STRICT_SECONDS: &'static str = "WIKI_QUIZ_STRICT_SECONDS";
const ENV_PAGE_SIZE: &'static str = "WIKI_QUIZ_PAGE_SIZE";

#[derive(Clone, Debug)]
pub struct Settings {
    pub strict_time_limit: Duration,
    pub tick_interval: Duration,
    pub history_page_size: u32,
    pub service_url: String,
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            strict_time_limit: Duration::from_secs(60),
            tick_interval: Duration::from_secs(1),
            history_page_size: 5,
            service_url: "http://127.0.0.1:8000".to_owned(),
            export_dir: default_export_dir(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let mut settings = Settings::default();
        if let Ok(url) = env::var(ENV_SERVICE_URL) {
            settings.service_url = url.trim_end_matches('/').to_owned();
        }
        if let Ok(dir) = env::var(ENV_EXPORT_DIR) {
            settings.export_dir = PathBuf::from(dir);
        }
        if let Ok(seconds) = env::var(ENV_STRICT_SECONDS) {
            let seconds: u64 = seconds
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of seconds", ENV_STRICT_SECONDS))?;
            if seconds == 0 {
                return Err(anyhow!("{} must be greater than zero", ENV_STRICT_SECONDS));
            }
            settings.strict_time_limit = Duration::from_secs(seconds);
        }
        if let Ok(page_size) = env::var(ENV_PAGE_SIZE) {
            let page_size: u32 = page_size
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive number", ENV_PAGE_SIZE))?;
            if page_size == 0 {
                return Err(anyhow!("{} must be greater than zero", ENV_PAGE_SIZE));
            }
            settings.history_page_size = page_size;
        }
        Ok(settings)
    }
}

fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
