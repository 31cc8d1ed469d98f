use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use nitlang::{eval_line, interpreter::evaluator::core::Interpreter};

/// nitlang is a small expression-and-function language with durable global
/// bindings, `#`-sigil function calls, and one statement per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nitlang to look at a file instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// Inline source to run; omit it to start the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_lines(&script);
}

/// Feeds a script through one session, one non-empty line at a time.
///
/// Errors are printed and execution continues with the next line; the
/// session state from before a failing line stays intact.
fn run_lines(script: &str) {
    let mut interpreter = Interpreter::new();

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match eval_line(&mut interpreter, line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("Error in line '{line}': {e}"),
        }
    }
}

/// Interactive read-eval-print loop sharing one durable session.
fn repl() {
    println!("nitlang interpreter. Type 'exit' to quit.");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("nitlang> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match eval_line(&mut interpreter, line) {
            Ok(value) => println!("=> {value}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
