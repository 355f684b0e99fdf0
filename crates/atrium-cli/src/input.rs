//! Token and line reading for the command language.
//!
//! Commands mix two read modes: whitespace-separated tokens that may span
//! line breaks, and "rest of the current line" reads for identifiers and
//! free text. [`Scanner`] provides both over any [`LineSource`].

use crate::error::{CliError, Result};
use std::io::BufRead;

/// Which prompt an interactive source should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Waiting for a command word
    Command,
    /// Waiting for more input belonging to the current command
    Continuation,
}

/// A source of input lines.
pub trait LineSource {
    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>>;
}

/// Line source over any buffered reader (files, pipes, tests).
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: Prompt) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Tokenizer with token and rest-of-line reads.
pub struct Scanner<S> {
    source: S,
    line: Option<String>,
    pos: usize,
    prompt: Prompt,
}

impl<S: LineSource> Scanner<S> {
    /// Create a scanner positioned before the first line.
    pub fn new(source: S) -> Self {
        Self {
            source,
            line: None,
            pos: 0,
            prompt: Prompt::Command,
        }
    }

    /// Give back the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn fill(&mut self) -> Result<bool> {
        match self.source.read_line(self.prompt)? {
            Some(line) => {
                self.line = Some(line);
                self.pos = 0;
                self.prompt = Prompt::Continuation;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Next command word, or `None` when input is exhausted.
    ///
    /// Blank input between commands is skipped.
    pub fn command(&mut self) -> Result<Option<String>> {
        self.prompt = Prompt::Command;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(line) = &self.line {
                let rest = &line[self.pos..];
                let skipped = rest.len() - rest.trim_start().len();
                let start = self.pos + skipped;
                let tail = &line[start..];
                if !tail.is_empty() {
                    let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                    let token = tail[..len].to_string();
                    self.pos = start + len;
                    return Ok(Some(token));
                }
                self.line = None;
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    /// Next whitespace-delimited token, crossing line breaks.
    pub fn token(&mut self) -> Result<String> {
        self.next_token()?.ok_or(CliError::UnexpectedEof)
    }

    /// Next token parsed as a non-negative integer.
    pub fn integer(&mut self) -> Result<u32> {
        let token = self.token()?;
        token
            .parse()
            .map_err(|_| CliError::InvalidInput(format!("expected a number, found '{}'", token)))
    }

    /// Remainder of the current line, or the whole next line when the
    /// previous read consumed a line break.
    pub fn rest_of_line(&mut self) -> Result<String> {
        if self.line.is_none() && !self.fill()? {
            return Err(CliError::UnexpectedEof);
        }
        let rest = self
            .line
            .take()
            .map(|line| line[self.pos..].to_string())
            .unwrap_or_default();
        self.pos = 0;
        Ok(rest)
    }

    /// Drop whatever is left of the current line.
    pub fn skip_line(&mut self) {
        self.line = None;
        self.pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(text: &str) -> Scanner<ReaderSource<Cursor<Vec<u8>>>> {
        Scanner::new(ReaderSource::new(Cursor::new(text.as_bytes().to_vec())))
    }

    #[test]
    fn test_tokens_cross_lines() {
        let mut s = scanner("register  manager\n\n  alice 3\n");
        assert_eq!(s.command().unwrap().as_deref(), Some("register"));
        assert_eq!(s.token().unwrap(), "manager");
        assert_eq!(s.token().unwrap(), "alice");
        assert_eq!(s.integer().unwrap(), 3);
        assert_eq!(s.command().unwrap(), None);
    }

    #[test]
    fn test_rest_of_line_after_token() {
        let mut s = scanner("project Big Data\nnext\n");
        assert_eq!(s.token().unwrap(), "project");
        assert_eq!(s.rest_of_line().unwrap(), " Big Data");
        assert_eq!(s.token().unwrap(), "next");
    }

    #[test]
    fn test_rest_of_line_is_empty_at_line_end() {
        let mut s = scanner("alice 3\nnext line\n");
        s.token().unwrap();
        s.integer().unwrap();
        assert_eq!(s.rest_of_line().unwrap(), "");
        assert_eq!(s.rest_of_line().unwrap(), "next line");
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let mut s = scanner("keyword web\r\n");
        s.token().unwrap();
        assert_eq!(s.rest_of_line().unwrap(), " web");
    }

    #[test]
    fn test_integer_rejects_words() {
        let mut s = scanner("three\n");
        assert!(matches!(s.integer(), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_end_of_input_inside_command() {
        let mut s = scanner("team alice");
        s.command().unwrap();
        s.token().unwrap();
        assert_eq!(s.rest_of_line().unwrap(), "");
        assert!(matches!(s.token(), Err(CliError::UnexpectedEof)));
        assert!(matches!(s.rest_of_line(), Err(CliError::UnexpectedEof)));
    }

    #[test]
    fn test_skip_line() {
        let mut s = scanner("a b c\nd\n");
        s.token().unwrap();
        s.skip_line();
        assert_eq!(s.token().unwrap(), "d");
    }
}
