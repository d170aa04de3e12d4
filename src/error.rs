//! Error types for LearnQuest.
//!
//! The chat itself never fails; errors only come from configuration and from
//! the host surfaces (navigation, catalog lookups).

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised by navigation and catalog lookups.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No active chat session; open the chat view first")]
    NoActiveSession,

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Unknown command: /{0}")]
    UnknownCommand(String),

    #[error("Unknown resource category: {0}")]
    UnknownCategory(String),

    #[error("Quest {0} not found")]
    QuestNotFound(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
