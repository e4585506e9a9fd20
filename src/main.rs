use std::{
    fs::read_to_string,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use cscan::{display_error, Scanner, TokenKind};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "cscan", version, about = "Tokenize a C-like source file")]
struct Cli {
    /// Source file to scan, or `-` to read standard input
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Only print diagnostics, not the token listing
    #[arg(long)]
    errors_only: bool,

    /// Leave COMMENT tokens out of the listing
    #[arg(long)]
    no_comments: bool,

    /// Log scanner activity at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn read_source(file: &Path) -> io::Result<String> {
    if file.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        read_to_string(file)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_name = if cli.file.as_os_str() == "-" {
        String::from("<stdin>")
    } else {
        cli.file.to_string_lossy().into_owned()
    };

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", file_name, err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let mut scanner = Scanner::with_file(source, file_name.as_str());
    let tokens = scanner.tokens();

    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if !cli.errors_only {
        for token in tokens
            .iter()
            .filter(|token| !(cli.no_comments && token.kind == TokenKind::Comment))
        {
            println!("{}:{}\t{}\t{}", token.line, token.column, token.kind, token.literal);
        }
    }

    if !scanner.has_errors() {
        return ExitCode::SUCCESS;
    }

    for error in scanner.errors() {
        eprint!("{}", display_error(error, scanner.source(), scanner.file()));
    }
    warn!(count = scanner.errors().len(), "lexical errors found");

    ExitCode::from(1)
}
