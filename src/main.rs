//! lk: command-line driver for the lk language.
//!
//! Usage:
//!   lk [options] <file>

use std::{fs::read_to_string, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser as ClapParser;
use lk::{format_error, lexer::{lexer::tokenize, tokens::Token}};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "lk", about = "Run an lk program", disable_version_flag = true)]
struct Cli {
    /// Source file to run.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Show version information.
    #[arg(short = 'v', long)]
    version: bool,

    /// Print the token stream instead of running the program.
    #[arg(short = 't', long)]
    tokens: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    if cli.version {
        println!("lk version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let Some(file) = cli.file else {
        eprintln!("Error: No file specified.");
        eprintln!("Use -h or --help for more information.");
        return ExitCode::FAILURE;
    };

    match run(&file, cli.tokens) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

/// Reads and tokenizes `file`. Lexer errors are rendered here and reported
/// as `Ok(false)`; only I/O failures come back as `Err`.
fn run(file: &Path, dump_tokens: bool) -> anyhow::Result<bool> {
    let source = read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let tokens = match tokenize(&source, file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, file, &source));
            return Ok(false);
        }
    };
    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if dump_tokens {
        tokens.iter().for_each(Token::debug);
    } else {
        println!("{}", execute(&tokens));
    }

    Ok(true)
}

/// Parsing and evaluation are not implemented yet, so running a program
/// yields its own text, rebuilt from the token stream.
fn execute(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}
