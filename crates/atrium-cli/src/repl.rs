//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::{LineSource, Prompt};
use crate::interpreter::Interpreter;
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

const COMMAND_PROMPT: &str = "atrium> ";
const CONTINUATION_PROMPT: &str = "   ...> ";

/// Line source backed by a rustyline editor.
pub struct EditorSource {
    editor: DefaultEditor,
    formatter: Formatter,
}

impl EditorSource {
    /// Create an editor capped at `history_size` entries.
    pub fn new(history_size: usize, formatter: Formatter) -> Result<Self> {
        let config = rustyline::Config::builder()
            .max_history_size(history_size)?
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor, formatter })
    }

    /// Load history, ignoring a missing file.
    pub fn load_history(&mut self, path: &Path) {
        let _ = self.editor.load_history(path);
    }

    /// Persist history.
    pub fn save_history(&mut self, path: &Path) -> Result<()> {
        self.editor.save_history(path)?;
        Ok(())
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: Prompt) -> Result<Option<String>> {
        let prompt = match prompt {
            Prompt::Command => COMMAND_PROMPT,
            Prompt::Continuation => CONTINUATION_PROMPT,
        };

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", self.formatter.info("Use 'exit' to quit"));
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(CliError::Readline(err)),
        }
    }
}

/// Run the interactive REPL.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Atrium REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut source = EditorSource::new(config.settings.history_size, formatter.clone())?;
    let history_path = get_history_path()?;
    source.load_history(&history_path);

    let mut interpreter = Interpreter::new(source, io::stdout(), formatter.clone());
    let outcome = interpreter.run();

    let (mut source, _) = interpreter.into_parts();
    if let Err(e) = source.save_history(&history_path) {
        warn!("Could not save history to {}: {}", history_path.display(), e);
    }
    outcome
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}
