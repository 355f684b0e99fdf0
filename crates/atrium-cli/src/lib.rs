//! Atrium CLI library.
//!
//! This library provides the command interpreter for the Atrium registry,
//! including input scanning, configuration management and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use input::{LineSource, Prompt, ReaderSource, Scanner};
pub use interpreter::{Flow, Interpreter};
pub use output::Formatter;
