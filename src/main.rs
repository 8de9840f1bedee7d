/*!
Main binary for jsonspan.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use std::io::stdout;
use std::io::{self};
use std::{
    fs,
    io::{IsTerminal, Read},
    path::PathBuf,
};

use jsonspan::{access, commands, span, tokenizer, utils};

/// Tokenize a JSON document and navigate its structure lazily.
#[derive(Parser)]
#[command(name = "jspan", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE")]
    /// Optional path to JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Display the total token count
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// Measure the span (in tokens) of the structure opening at the given
    /// token index
    #[arg(long, value_name = "INDEX")]
    span: Option<usize>,
    /// Locate the Nth (0-based) element of the array at token 0
    #[arg(long, value_name = "N")]
    element: Option<usize>,
    /// Locate the value bound to KEY in the object at token 0
    #[arg(long, value_name = "KEY")]
    key: Option<String>,
    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

/// Available subcommands for `jspan`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jspan to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// This parses the command line arguments, tokenizes the input document
/// (from a file or STDIN), and runs the requested span or navigation
/// queries. Without query flags it prints a colorized token listing.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match args.command {
        Some(Commands::Generate(cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                generate(shell, &mut cmd, "jspan", &mut stdout().lock());
            }
            GenerateCommand::Man { output_dir } => {
                let cmd = Args::command();
                commands::generate::generate_man_pages(&cmd, output_dir)?;
            }
        },
        None => run_queries(args)?,
    }

    Ok(())
}

/// Tokenize the input and answer the requested queries.
fn run_queries(args: Args) -> Result<()> {
    // Parse input content
    let input_content = if let Some(path) = args.input {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file {path:?}"))?
    } else {
        if io::stdin().is_terminal() {
            // No piped input and no file specified
            let mut cmd = Args::command();
            return Ok(cmd.print_help()?);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let tokens = tokenizer::tokenize(&input_content)
        .context("Failed to tokenize JSON")?;

    let mut answered = false;

    if args.count {
        println!("Tokens: {}", tokens.len());
        answered = true;
    }

    if let Some(index) = args.span {
        let length = span::span_length(&tokens, index).with_context(|| {
            format!("Failed to measure span at token {index}")
        })?;
        println!("Span at {index}: {length} tokens");
        answered = true;
    }

    if let Some(n) = args.element {
        match access::element_offset(&tokens, 0, n)
            .with_context(|| format!("Failed to locate element {n}"))?
        {
            Some(offset) => {
                println!("Element {n} at token {offset}: {}", tokens[offset]);
            }
            None => println!("Element {n}: not found"),
        }
        answered = true;
    }

    if let Some(key) = args.key {
        match access::value_offset(&tokens, 0, &key)
            .with_context(|| format!("Failed to locate key {key:?}"))?
        {
            Some(offset) => {
                println!("Key {key:?} at token {offset}: {}", tokens[offset]);
            }
            None => println!("Key {key:?}: not found"),
        }
        answered = true;
    }

    if !answered {
        utils::write_colored_tokens(&mut stdout().lock(), &tokens)?;
    }

    Ok(())
}
