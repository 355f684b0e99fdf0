//! Output formatting for the CLI.

use crate::error::{CliError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use colored::*;

/// Placeholder printed where a project has no revision date yet.
pub const NO_DATE: &str = "n/a";

/// Output formatter.
///
/// Colour only wraps whole lines; with colour disabled every method
/// returns its input unchanged.
#[derive(Debug, Clone)]
pub struct Formatter {
    color_enabled: bool,
    date_format: String,
}

impl Formatter {
    /// Create a new formatter, rejecting malformed date formats.
    pub fn new(color_enabled: bool, date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CliError::Config(format!(
                "Invalid date format '{}'",
                date_format
            )));
        }

        Ok(Self {
            color_enabled,
            date_format,
        })
    }

    /// Plain formatter with the default `dd-mm-yyyy` dates.
    pub fn plain() -> Self {
        Self {
            color_enabled: false,
            date_format: "%d-%m-%Y".to_string(),
        }
    }

    /// Render a date.
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Render an optional date, `n/a` when absent.
    pub fn optional_date(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| self.date(d))
            .unwrap_or_else(|| NO_DATE.to_string())
    }

    /// Parse a date written in the configured format.
    pub fn parse_date(&self, text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text, &self.date_format)
            .map_err(|e| CliError::InvalidInput(format!("invalid date '{}': {}", text, e)))
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(message, "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Format a listing title.
    pub fn title(&self, message: &str) -> String {
        self.colorize(message, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::plain()
    }
}
