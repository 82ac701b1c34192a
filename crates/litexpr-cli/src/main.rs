//! `litexpr` CLI — compile, evaluate and inspect literal expressions from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate an expression (stdin → stdout), printed as pretty JSON
//! echo "[1, 'two', true, [3]]" | litexpr eval
//!
//! # Evaluate from file to file
//! litexpr eval -i data.lit -o data.json
//!
//! # Print the generated function body
//! echo "'a\"b'" | litexpr emit
//!
//! # Print the AST or the token stream
//! litexpr ast -i data.lit
//! litexpr tokens -i data.lit
//!
//! # Tighten the nesting bound, directly or from a JSON options file
//! litexpr --max-depth 8 eval -i data.lit
//! litexpr --config options.json eval -i data.lit
//!
//! # Trace the pipeline stages
//! RUST_LOG=litexpr_core=debug litexpr eval -i data.lit
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use litexpr_core::CompileOptions;
use log::debug;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "litexpr",
    version,
    about = "Literal-expression compiler CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with compile options (e.g. {"max_depth": 64})
    #[arg(long, global = true)]
    config: Option<String>,

    /// Deepest array nesting accepted, capped at 1024 (overrides --config)
    #[arg(long, global = true)]
    max_depth: Option<usize>,
}

#[derive(Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and evaluate, printing the value as JSON
    Eval(Io),
    /// Print the generated function body
    Emit(Io),
    /// Print the AST as JSON
    Ast(Io),
    /// Print one token per line as `offset<TAB>text`
    Tokens(Io),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = load_options(cli.config.as_deref(), cli.max_depth)?;
    debug!("compile options: {options:?}");

    match cli.command {
        Commands::Eval(io) => {
            let source = read_input(io.input.as_deref())?;
            let callable = litexpr_core::compile_with(&source, &options)
                .context("Failed to compile expression")?;
            let value = serde_json::Value::from(callable.call());
            let pretty = serde_json::to_string_pretty(&value)?;
            write_output(io.output.as_deref(), &pretty)?;
        }
        Commands::Emit(io) => {
            let source = read_input(io.input.as_deref())?;
            let callable = litexpr_core::compile_with(&source, &options)
                .context("Failed to compile expression")?;
            write_output(io.output.as_deref(), callable.source())?;
        }
        Commands::Ast(io) => {
            let source = read_input(io.input.as_deref())?;
            let tokens = litexpr_core::tokenize(&source).context("Failed to tokenize input")?;
            let ast = litexpr_core::build_with(&tokens, &options)
                .context("Failed to build syntax tree")?;
            let pretty = serde_json::to_string_pretty(&ast)?;
            write_output(io.output.as_deref(), &pretty)?;
        }
        Commands::Tokens(io) => {
            let source = read_input(io.input.as_deref())?;
            let tokens = litexpr_core::tokenize(&source).context("Failed to tokenize input")?;
            let lines: Vec<String> = tokens
                .iter()
                .map(|t| format!("{}\t{}", t.offset, t.text.escape_debug()))
                .collect();
            write_output(io.output.as_deref(), &lines.join("\n"))?;
        }
    }

    Ok(())
}

/// Build compile options from `--config` and `--max-depth`.
///
/// - no flags → defaults
/// - `--config file.json` → options from the file, missing fields defaulted
/// - `--max-depth N` → overrides whatever the file said
fn load_options(config: Option<&str>, max_depth: Option<usize>) -> Result<CompileOptions> {
    let mut options = match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid compile options in: {}", path))?
        }
        None => CompileOptions::default(),
    };
    if let Some(depth) = max_depth {
        options.max_depth = depth;
    }
    Ok(options)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
