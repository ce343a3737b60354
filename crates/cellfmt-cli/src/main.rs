//! cellfmt CLI - tokenize patterns and parse text against them

use anyhow::{Context, Result};
use cellfmt::{tokenize, ParseOutcome, Pattern, PatternKind, Symbols, YearWindow};
use clap::{Parser, Subcommand};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "cellfmt")]
#[command(author, version, about = "Parse text with Excel-style cell format patterns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the format tokens of a pattern with their offsets
    Tokens {
        /// Format pattern, e.g. "#,##0.00;(#,##0.00)"
        pattern: String,
    },

    /// Compile a pattern and list its alternatives
    Compile {
        pattern: String,

        /// Pattern kind: number, date, time or datetime
        #[arg(short, long, default_value = "number")]
        kind: PatternKind,
    },

    /// Parse text against a pattern
    Parse {
        pattern: String,

        /// Text to parse
        text: String,

        /// Pattern kind: number, date, time or datetime
        #[arg(short, long, default_value = "number")]
        kind: PatternKind,

        /// Locale symbols (en-us, de-de, fr-fr)
        #[arg(short, long, default_value = "en-us")]
        locale: String,

        /// Reference year for two-digit years (default: current year)
        #[arg(long)]
        pivot_year: Option<i32>,

        /// Require the whole text to match
        #[arg(short, long)]
        complete: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens { pattern } => show_tokens(&pattern),
        Commands::Compile { pattern, kind } => show_alternatives(&pattern, kind),
        Commands::Parse {
            pattern,
            text,
            kind,
            locale,
            pivot_year,
            complete,
            json,
        } => parse_text(&pattern, &text, kind, &locale, pivot_year, complete, json),
    }
}

fn show_tokens(pattern: &str) -> Result<()> {
    let tokens = tokenize(pattern).with_context(|| format!("Failed to tokenize '{}'", pattern))?;

    for token in &tokens {
        println!("{}\t{:?}\t{:?}", token.offset, token.text, token.kind);
    }
    Ok(())
}

fn show_alternatives(pattern: &str, kind: PatternKind) -> Result<()> {
    let compiled = Pattern::compile(pattern, kind)
        .with_context(|| format!("Failed to compile {} pattern '{}'", kind, pattern))?;

    for (i, alternative) in compiled.alternatives().iter().enumerate() {
        println!(
            "{}\t@{}\t{:?}\t{} component(s)",
            i,
            alternative.offset(),
            alternative.source(),
            alternative.components().len()
        );
        for component in alternative.components() {
            println!("\t{:?}", component);
        }
    }
    Ok(())
}

fn parse_text(
    pattern: &str,
    text: &str,
    kind: PatternKind,
    locale: &str,
    pivot_year: Option<i32>,
    complete: bool,
    json: bool,
) -> Result<()> {
    let mut symbols =
        Symbols::for_locale(locale).with_context(|| format!("Unknown locale '{}'", locale))?;
    if let Some(year) = pivot_year {
        symbols = symbols.with_year_window(YearWindow::new(year, 20));
    }

    let compiled = Pattern::compile(pattern, kind)
        .with_context(|| format!("Failed to compile {} pattern '{}'", kind, pattern))?;

    let outcome = if complete {
        compiled.parse_complete(text, &symbols)
    } else {
        compiled.parse(text, &symbols)
    }
    .with_context(|| format!("Failed to parse '{}'", text))?;

    if json {
        let out = serde_json::to_string_pretty(&outcome).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        print_outcome(&outcome).context("Failed to write to stdout")?;
    }
    Ok(())
}

fn print_outcome(outcome: &ParseOutcome) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Alternative: {}", outcome.alternative)?;
    writeln!(out, "Value: {}", outcome.value)?;
    writeln!(out, "Consumed: {:?}", outcome.consumed)?;
    if !outcome.remainder.is_empty() {
        writeln!(out, "Remainder: {:?}", outcome.remainder)?;
    }
    writeln!(out, "Tokens:")?;
    for token in &outcome.tokens {
        writeln!(out, "  {:?}\t{:?}", token.kind, token.text)?;
    }
    Ok(())
}
