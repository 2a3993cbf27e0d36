use std::{fs, io, process};

use clap::Parser;
use quill::{
    interpreter::{lexer::tokenize, parser::core::parse},
    run_with_output,
};
use tracing_subscriber::EnvFilter;

/// quill is a small interpreted language with first-class functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream instead of running the program.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed syntax tree instead of running the program.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = execute(&script, args.tokens, args.ast) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn execute(script: &str, show_tokens: bool, show_ast: bool) -> Result<(), quill::error::Error> {
    if show_tokens || show_ast {
        let tokens = tokenize(script)?;
        if show_tokens {
            for (token, line) in &tokens {
                println!("{line:>4}  {token}");
            }
        } else {
            println!("{:#?}", parse(&tokens)?);
        }
        return Ok(());
    }

    run_with_output(script, io::stdout().lock())
}
