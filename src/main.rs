//! CLI for the zimu lexer: an interactive token REPL and a file lexer.

use std::io::{self, Write};
use std::process::ExitCode;

use zimu::{LineNumbering, ReplConfig, Token};

fn usage() -> ExitCode {
    eprintln!("Usage: zimu [command] [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  repl [--continuous]  Lex lines from stdin (default)");
    eprintln!("  lex <files...>       Print the tokens of each file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --continuous  Keep counting lines across the REPL session");
    eprintln!();
    eprintln!("Set RUST_LOG=trace to log every token produced.");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            println!("Welcome to zimu");
            println!("Starting zimu repl...");
            run_repl(&ReplConfig::default())
        }
        Some("repl") => {
            let mut config = ReplConfig::default();
            for flag in &args[2..] {
                match flag.as_str() {
                    "--continuous" => config.line_numbering = LineNumbering::Continuous,
                    _ => {
                        eprintln!("Unknown option: {flag}");
                        return usage();
                    }
                }
            }
            run_repl(&config)
        }
        Some("lex") => {
            let files = &args[2..];
            if files.is_empty() {
                eprintln!("Error: no files specified");
                return ExitCode::from(2);
            }
            lex_files(files)
        }
        Some("--help" | "-h") => usage(),
        Some(command) => {
            eprintln!("Unknown command: {command}");
            usage()
        }
    }
}

fn run_repl(config: &ReplConfig) -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match zimu::repl::start(stdin.lock(), &mut stdout, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn lex_files(files: &[String]) -> ExitCode {
    let mut had_error = false;
    let mut stdout = io::stdout().lock();

    for path in files {
        let tokens = match zimu::lex_file(path) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        for token in &tokens {
            if let Err(e) = writeln!(stdout, "{token}") {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }

        for token in tokens.iter().filter(|t| t.is_illegal()) {
            report_illegal(token);
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report_illegal(token: &Token) {
    eprintln!("{}: illegal character {:?}", token.location, token.literal);
}
