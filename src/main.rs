use std::{fs, process};

use clap::Parser;
use emojilang::interpreter::{evaluator::core::Context, lexer::scan, parser::core::parse};

/// emojilang runs programs written with emoji keywords: 📦 assigns, 📢 prints,
/// ❓ branches and 🔁 loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells emojilang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the scanned tokens, one per line, instead of running the script.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed syntax tree instead of running the script.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn main() {
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

    let tokens = scan(&script);

    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
        return;
    }

    let program = parse(&tokens).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if args.ast {
        println!("{program:#?}");
        return;
    }

    if let Err(e) = Context::new().execute(&program) {
        eprintln!("{e}");
        process::exit(1);
    }
}
