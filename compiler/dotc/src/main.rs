//! DOT lexer CLI.
//!
//! Reads a DOT file, tokenizes it, and prints the token stream.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dot_lexer::{
    dot_rules, lex_observed, DotLexError, DotRules, LexObserver, NoopObserver, PatternError,
    SourceText, TerminalKind, TextEncoding, TracingObserver,
};

mod output;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "dot-lex", version, about = "Tokenize a Graphviz DOT file")]
struct Cli {
    /// DOT source file
    #[arg(value_name = "FILE", required_unless_present = "rules")]
    path: Option<PathBuf>,

    /// Text encoding of the source file
    #[arg(long, default_value = "utf-8")]
    encoding: TextEncoding,

    /// Name to report in tokens and diagnostics instead of the canonical path
    #[arg(long)]
    resource: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print the rule table instead of tokenizing
    #[arg(long)]
    rules: bool,

    /// Increase log verbosity (-v: debug, -vv: trace every rule match)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid rule table: {0}")]
    Rules(#[from] PatternError),
    #[error(transparent)]
    Lex(#[from] DotLexError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_setup::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let rules = dot_rules()?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match (cli.rules, cli.path.as_deref()) {
        (false, Some(path)) => lex_to(&mut out, cli, &rules, path)?,
        // clap requires FILE unless --rules is given.
        (true, _) | (false, None) => output::write_rules(&mut out, &rules)?,
    }
    out.flush()?;
    Ok(())
}

fn lex_to(
    out: &mut impl Write,
    cli: &Cli,
    rules: &DotRules,
    path: &Path,
) -> Result<(), CliError> {
    let mut source = SourceText::load(path, cli.encoding).map_err(DotLexError::from)?;
    if let Some(resource) = &cli.resource {
        source = source.with_resource(resource.as_str());
    }

    let mut observer: Box<dyn LexObserver<TerminalKind>> = if cli.verbose >= 2 {
        Box::new(TracingObserver)
    } else {
        Box::new(NoopObserver)
    };
    let tokens = lex_observed(&source, rules, observer.as_mut()).map_err(DotLexError::from)?;
    tracing::debug!(count = tokens.len(), resource = %source.resource(), "lexed");

    match cli.format {
        Format::Json => output::write_json(out, &tokens)?,
        Format::Text => output::write_text(out, &tokens)?,
    }
    Ok(())
}
