//! Error types for the CLI application.

use atrium_store::RegistryError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry rejected a command; the message is shown as-is
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Line editor error
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input ended in the middle of a command
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Job word is neither manager nor developer
    #[error("Unknown job position.")]
    UnknownJobPosition,

    /// Project type word is neither inhouse nor outsourced
    #[error("Unknown project type.")]
    UnknownProjectType,
}
