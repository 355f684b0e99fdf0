//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atrium - keep track of employees, projects and artefact revisions.
#[derive(Debug, Parser)]
#[command(name = "atrium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ATRIUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// chrono format for dates read and printed (default: %d-%m-%Y)
    #[arg(long, global = true)]
    pub date_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter interactive REPL mode (reads stdin as a script when piped)
    Repl,

    /// Execute a script of interpreter commands
    Run(RunArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Script file, one command per line
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["atrium"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_run_command() {
        let cli = Cli::parse_from(["atrium", "run", "session.txt", "--no-color"]);
        match cli.command {
            Some(Command::Run(args)) => assert_eq!(args.file, PathBuf::from("session.txt")),
            _ => panic!("Expected Run command"),
        }
        assert!(cli.no_color);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "atrium",
            "--date-format",
            "%Y-%m-%d",
            "--config",
            "/tmp/atrium.toml",
            "repl",
        ]);
        assert!(matches!(cli.command, Some(Command::Repl)));
        assert_eq!(cli.date_format.as_deref(), Some("%Y-%m-%d"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/atrium.toml")));
    }
}
