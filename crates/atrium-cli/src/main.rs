//! Atrium CLI - Command interpreter for the Atrium project registry.

use atrium_cli::{repl, Cli, Command, Config, Formatter, Interpreter, ReaderSource};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> atrium_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; defaults are written only when the default file is absent
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };

    init_tracing(&config);

    let date_format = cli
        .date_format
        .clone()
        .unwrap_or_else(|| config.settings.date_format.clone());
    let color = !cli.no_color && config.settings.color;

    match cli.command {
        None | Some(Command::Repl) => {
            if io::stdin().is_terminal() {
                let formatter = Formatter::new(color && io::stdout().is_terminal(), date_format)?;
                repl::run_repl(&config, &formatter)?;
            } else {
                let formatter = Formatter::new(false, date_format)?;
                run_script(io::stdin().lock(), formatter)?;
            }
        }
        Some(Command::Run(args)) => {
            let formatter = Formatter::new(false, date_format)?;
            let file = File::open(&args.file)?;
            run_script(BufReader::new(file), formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `ATRIUM_LOG` wins over the configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("ATRIUM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.settings.log_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run_script(reader: impl BufRead, formatter: Formatter) -> atrium_cli::Result<()> {
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(ReaderSource::new(reader), stdout.lock(), formatter);
    interpreter.run()
}
