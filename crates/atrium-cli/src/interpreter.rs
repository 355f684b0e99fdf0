//! Command interpreter driving a [`MemoryRegistry`] from a line source.

use crate::commands::{self, CommandWord};
use crate::error::{CliError, Result};
use crate::input::{LineSource, Scanner};
use crate::output::Formatter;
use atrium_store::{MemoryRegistry, RegistryError};
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

/// Printed for a command word nobody recognises.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type help to see available commands.";

/// Printed when the session ends with `exit`.
pub const BYE: &str = "Bye!";

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop reading
    Exit,
}

/// Command interpreter over a registry, an input scanner and an output sink.
///
/// Registry errors are printed and never end the session. Input errors
/// (an unparsable number or date) are printed and the rest of the
/// offending line is dropped.
pub struct Interpreter<S, W> {
    pub(crate) registry: MemoryRegistry,
    pub(crate) scanner: Scanner<S>,
    pub(crate) out: W,
    pub(crate) formatter: Formatter,
}

impl<S: LineSource, W: Write> Interpreter<S, W> {
    /// Create an interpreter over an empty registry.
    pub fn new(source: S, out: W, formatter: Formatter) -> Self {
        Self {
            registry: MemoryRegistry::new(),
            scanner: Scanner::new(source),
            out,
            formatter,
        }
    }

    /// The registry as left by the commands run so far.
    pub fn registry(&self) -> &MemoryRegistry {
        &self.registry
    }

    /// Give back the line source and the output sink.
    pub fn into_parts(self) -> (S, W) {
        (self.scanner.into_source(), self.out)
    }

    /// Run commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        self.out.flush()?;
        Ok(())
    }

    /// Read and execute one command.
    pub fn step(&mut self) -> Result<Flow> {
        let Some(word) = self.scanner.command()? else {
            return Ok(Flow::Exit);
        };

        let command = CommandWord::parse(&word);
        debug!("Dispatching {:?} for '{}'", command, word);
        let outcome = match command {
            Some(CommandWord::Exit) => {
                self.emit(BYE)?;
                return Ok(Flow::Exit);
            }
            Some(command) => commands::execute(self, command),
            None => self.emit(UNKNOWN_COMMAND),
        };

        match outcome {
            Ok(()) => {}
            Err(e @ CliError::InvalidInput(_)) => {
                self.scanner.skip_line();
                self.report(&e.to_string())?;
            }
            Err(
                e @ (CliError::Registry(_)
                | CliError::UnknownJobPosition
                | CliError::UnknownProjectType),
            ) => self.report(&e.to_string())?,
            Err(CliError::UnexpectedEof) => return Ok(Flow::Exit),
            Err(other) => return Err(other),
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    /// Write one line of output.
    pub(crate) fn emit(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Write a listing title.
    pub(crate) fn title(&mut self, text: &str) -> Result<()> {
        let line = self.formatter.title(text);
        self.emit(line)
    }

    /// Write an error message.
    pub(crate) fn report(&mut self, message: &str) -> Result<()> {
        let line = self.formatter.error(message);
        self.emit(line)
    }

    /// Write a registry error as its message.
    pub(crate) fn reject(&mut self, error: &RegistryError) -> Result<()> {
        self.report(&error.to_string())
    }
}
