use thiserror::Error;

#[derive(Error, Debug)]
pub enum RailboardError {
    #[error("Invalid train status: {0}. Valid statuses: on time, delayed, cancelled, boarding")]
    InvalidStatus(String),

    #[error("Invalid filter: {0}. Valid filters: all, delayed, ontime")]
    InvalidFilter(String),

    #[error("Invalid tab: {0}. Valid tabs: schedule, live, manage")]
    InvalidTab(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Unknown command: {0}. Type 'help' for commands.")]
    UnknownCommand(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RailboardError>;
