//! oxide-expr CLI
//!
//! Scans and parses a single expression and prints the result.

use std::io::Read;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_expr_core::{Ast, Token, parse, scan};

/// Scan and parse SQL-style expressions.
#[derive(Parser)]
#[command(name = "oxide-expr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expression to parse (read from stdin if not specified).
    expression: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, env = "OXIDE_EXPR_FORMAT", default_value = "tree")]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Branch diagram of the AST.
    Tree,
    /// One token per line.
    Tokens,
    /// The AST as pretty-printed JSON.
    Json,
}

/// Runs the pipeline on `input` and renders it in `format`.
fn render(input: &str, format: Format) -> anyhow::Result<String> {
    let tokens = scan(input).context("Failed to scan expression")?;

    match format {
        Format::Tokens => Ok(tokens.iter().map(|t| format!("{t}\n")).collect()),
        Format::Tree => Ok(build_tree(tokens)?.to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(&build_tree(tokens)?)? + "\n"),
    }
}

fn build_tree(tokens: Vec<Token>) -> anyhow::Result<Ast> {
    let root = parse(tokens).context("Failed to parse expression")?;
    debug!(depth = root.depth(), "rendering");
    Ok(root)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = match cli.expression {
        Some(expression) => expression,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read expression from stdin")?;
            buf
        }
    };

    print!("{}", render(&input, cli.format)?);
    Ok(())
}
