pub mod commands;
pub mod error;
pub mod export;
pub mod history;
pub mod output;
pub mod quiz;
pub mod service;
pub mod settings;
pub mod shell;
pub mod timer;
