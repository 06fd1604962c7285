//! Command line interface for prism.
//!
//! Reads one chat reply from a file or stdin and prints its ANSI-decorated
//! rendering, or extracts code blocks for clipboard-style reuse. All
//! formatting lives in [`prism_md`]; this crate is argument parsing and
//! plumbing.

mod error;

use std::{
    fs,
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use error::{Error, Result};
use prism_md::{Formatter, code_blocks, theme};
use prism_term::BlockSelect;
use tracing::trace;

/// Prism, a terminal markdown painter for LLM chat replies.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File containing the chat reply. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Syntax highlighting theme, see --list-themes.
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Interactively pick a code block and print its raw code.
    #[arg(short, long, conflicts_with = "block")]
    select: bool,

    /// Print the raw code of the Nth code block (1-based).
    #[arg(short, long, value_name = "N")]
    block: Option<usize>,

    /// List the available highlighting themes and exit.
    #[arg(long)]
    list_themes: bool,

    #[command(flatten, next_help_heading = "Global Options")]
    globals: Globals,
}

#[derive(Debug, clap::Args)]
pub struct Globals {
    /// Increase verbosity of logging.
    ///
    /// Can be specified multiple times to increase verbosity.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging, including errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Parse arguments, run, and map errors to a nonzero exit code.
#[must_use]
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    configure_logging(cli.globals.verbose, cli.globals.quiet);
    trace!(?cli, "Starting CLI run.");

    match run_inner(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run_inner(cli: Cli) -> Result<()> {
    if cli.list_themes {
        let mut stdout = io::stdout().lock();
        for name in theme::names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let message = read_message(cli.input.as_deref())?;
    let formatter = Formatter::with_theme(cli.theme.as_deref());

    if cli.select {
        // The selection itself is read from stdin, so the reply cannot
        // also come from there.
        if cli.input.is_none() {
            return Err(Error::SelectNeedsFile);
        }

        let blocks = code_blocks(&message);
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        if let Some(code) = BlockSelect::new(&formatter, &blocks).prompt(&mut input, &mut output)? {
            write!(output, "{code}")?;
        }
        return Ok(());
    }

    if let Some(number) = cli.block {
        let blocks = code_blocks(&message);
        let block = number
            .checked_sub(1)
            .and_then(|at| blocks.get(at))
            .ok_or(Error::NoSuchBlock {
                number,
                available: blocks.len(),
            })?;
        print!("{}", block.code);
        return Ok(());
    }

    print!("{}", formatter.format(&message));
    if !message.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Read the chat reply from `input`, or stdin when absent.
fn read_message(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::ReadInput {
            path: path.to_owned(),
            source,
        }),
        None => {
            let mut message = String::new();
            io::stdin().lock().read_to_string(&mut message)?;
            Ok(message)
        }
    }
}

fn configure_logging(verbose: u8, quiet: bool) {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::fmt;

    let mut level = match verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    if quiet {
        level = LevelFilter::OFF;
    }

    let mut filter = vec!["off".to_owned()];
    for krate in ["cli", "md", "term"] {
        filter.push(format!("prism_{krate}={level}"));
    }

    let format = fmt::format().with_target(false).compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .without_time()
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter.join(","))
        .init();
}
