//! Command implementations.

pub mod artefact;
pub mod query;
pub mod register;
pub mod team;

use crate::error::Result;
use crate::input::LineSource;
use crate::interpreter::Interpreter;
use std::io::Write;

/// Commands of the interpreter language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    /// Register a manager or developer
    Register,
    /// List every employee
    Users,
    /// Create a project
    Create,
    /// List every project
    Projects,
    /// Add members to a team
    Team,
    /// Add artefacts to a project
    Artefacts,
    /// Detailed view of one in-house project
    Project,
    /// Revise an artefact
    Revision,
    /// Developers of a manager and their revisions
    Manages,
    /// Projects by keyword
    Keyword,
    /// Projects by confidentiality range
    Confidentiality,
    /// Most active employees
    Workaholics,
    /// Employees with most projects in common
    Common,
    /// Show the available commands
    Help,
    /// End the session
    Exit,
}

impl CommandWord {
    /// Every command, in help order.
    pub const ALL: [CommandWord; 15] = [
        CommandWord::Register,
        CommandWord::Users,
        CommandWord::Create,
        CommandWord::Projects,
        CommandWord::Team,
        CommandWord::Artefacts,
        CommandWord::Project,
        CommandWord::Revision,
        CommandWord::Manages,
        CommandWord::Keyword,
        CommandWord::Confidentiality,
        CommandWord::Workaholics,
        CommandWord::Common,
        CommandWord::Help,
        CommandWord::Exit,
    ];

    /// The word typed to invoke the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Register => "register",
            CommandWord::Users => "users",
            CommandWord::Create => "create",
            CommandWord::Projects => "projects",
            CommandWord::Team => "team",
            CommandWord::Artefacts => "artefacts",
            CommandWord::Project => "project",
            CommandWord::Revision => "revision",
            CommandWord::Manages => "manages",
            CommandWord::Keyword => "keyword",
            CommandWord::Confidentiality => "confidentiality",
            CommandWord::Workaholics => "workaholics",
            CommandWord::Common => "common",
            CommandWord::Help => "help",
            CommandWord::Exit => "exit",
        }
    }

    /// One-line description shown by `help`.
    pub fn summary(&self) -> &'static str {
        match self {
            CommandWord::Register => "adds a new user",
            CommandWord::Users => "lists all registered users",
            CommandWord::Create => "creates a new project",
            CommandWord::Projects => "lists all projects",
            CommandWord::Team => "adds team members to a project",
            CommandWord::Artefacts => "adds artefacts to a project",
            CommandWord::Project => "shows detailed project information",
            CommandWord::Revision => "revises an artefact",
            CommandWord::Manages => "lists developers of a manager",
            CommandWord::Keyword => "filters projects by keyword",
            CommandWord::Confidentiality => "filters projects by confidentiality level",
            CommandWord::Workaholics => "top 3 employees with more artefacts updates",
            CommandWord::Common => "employees with more projects in common",
            CommandWord::Help => "shows the available commands",
            CommandWord::Exit => "terminates the execution of the program",
        }
    }

    /// Parse a command word (case-insensitive).
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == word)
    }
}

/// Run one command whose word has already been read.
///
/// `exit` is handled by the interpreter loop itself.
pub fn execute<S: LineSource, W: Write>(
    session: &mut Interpreter<S, W>,
    command: CommandWord,
) -> Result<()> {
    match command {
        CommandWord::Register => register::execute_register(session),
        CommandWord::Users => register::execute_users(session),
        CommandWord::Create => register::execute_create(session),
        CommandWord::Projects => register::execute_projects(session),
        CommandWord::Team => team::execute_team(session),
        CommandWord::Manages => team::execute_manages(session),
        CommandWord::Artefacts => artefact::execute_artefacts(session),
        CommandWord::Project => artefact::execute_project(session),
        CommandWord::Revision => artefact::execute_revision(session),
        CommandWord::Keyword => query::execute_keyword(session),
        CommandWord::Confidentiality => query::execute_confidentiality(session),
        CommandWord::Workaholics => query::execute_workaholics(session),
        CommandWord::Common => query::execute_common(session),
        CommandWord::Help => execute_help(session),
        CommandWord::Exit => Ok(()),
    }
}

/// Print every command with its summary.
fn execute_help<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    session.title("Available commands:")?;
    for command in CommandWord::ALL {
        session.emit(format!("{} - {}", command.as_str(), command.summary()))?;
    }
    Ok(())
}
