use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use min::{error::RunError, interpreter::evaluator::core::Interpreter, run};

/// Exit code for a malformed command line.
const EX_USAGE: u8 = 64;
/// Exit code for a program that fails to parse.
const EX_DATAERR: u8 = 65;
/// Exit code for a program that fails at runtime.
const EX_SOFTWARE: u8 = 70;

/// min is a small dynamically typed scripting language with C-style syntax,
/// first-class functions, and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run. Starts an interactive session when omitted.
    script: Option<String>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(EX_USAGE);
        },
    };

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Runs a script file to completion.
fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        },
    };

    let mut interpreter = Interpreter::new();

    match run(&mut interpreter, &source, false) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");

            match error {
                RunError::Syntax(_) => ExitCode::from(EX_DATAERR),
                RunError::Runtime(_) => ExitCode::from(EX_SOFTWARE),
            }
        },
    }
}

/// Runs an interactive session until end of input or `exit`.
///
/// State persists across lines, so declarations made on one line are
/// visible on the next. Errors are printed and the session continues.
fn run_prompt() -> ExitCode {
    println!("min interactive session. Type 'exit' to leave.");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        if line.trim() == "exit" {
            break;
        }

        if let Err(error) = run(&mut interpreter, &line, true) {
            eprintln!("{error}");
        }
    }

    ExitCode::SUCCESS
}
