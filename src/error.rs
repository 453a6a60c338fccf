use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Generation(String),
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Delete(String),
    #[error("Could not read stored quiz: {0}")]
    MalformedHistory(String),
    #[error("Could not export quiz: {0}")]
    Export(String),
    #[error("{0}")]
    InvalidPhase(&'static str),
}
