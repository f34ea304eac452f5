//! `oshc`: inspect how the shell token matcher lexes input.

use std::path::Path;

use oshc::commands::{lex, lex_file, modes, token};
use oshc::config::{parse_mode, parse_start, LexFileOptions};
use oshc::{init_tracing, CliError};
use osh_lexer_core::RuleTables;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let tables = RuleTables::osh();
    let mut stdout = std::io::stdout().lock();

    let result = match command.as_str() {
        "token" => {
            if args.len() < 4 {
                eprintln!("Usage: oshc token <mode> <line> [start]");
                std::process::exit(1);
            }
            parse_mode(&args[2]).and_then(|mode| {
                let start = match args.get(4) {
                    Some(arg) => parse_start(arg)?,
                    None => 0,
                };
                token(&mut stdout, &tables, mode, &args[3], start)
            })
        }
        "lex" => {
            if args.len() < 4 {
                eprintln!("Usage: oshc lex <mode> <line>");
                std::process::exit(1);
            }
            parse_mode(&args[2]).and_then(|mode| lex(&mut stdout, &tables, mode, &args[3]))
        }
        "lex-file" => {
            if args.len() < 3 {
                eprintln!("Usage: oshc lex-file <path> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --mode=<mode>   Mode every line is lexed in (default: ShCommand)");
                eprintln!("  --stats         Print a histogram of token kinds");
                eprintln!("  --parallel      Lex lines in parallel");
                std::process::exit(1);
            }
            LexFileOptions::parse(&args[3..]).and_then(|options| {
                lex_file(&mut stdout, &tables, Path::new(&args[2]), &options)
            })
        }
        "modes" => modes(&mut stdout, &tables),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("oshc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}

fn report(err: &CliError) {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("error: {err}");
}

fn print_usage() {
    println!("oshc: shell token matcher driver");
    println!();
    println!("Usage: oshc <command> [options]");
    println!();
    println!("Commands:");
    println!("  token <mode> <line> [start]  Match one token; print its id and end position");
    println!("  lex <mode> <line>            Print every token of a line, read in one mode");
    println!("  lex-file <path> [options]    Lex each line of a file in one mode");
    println!("  modes                        List lex modes and their fallback ids");
    println!("  help                         Show this help message");
    println!("  version                      Show version information");
    println!();
    println!("Modes are named as listed by `oshc modes` (case-insensitive), e.g. ShCommand, DQ.");
    println!();
    println!("Environment:");
    println!("  OSHC_LOG=<filter>   Enable logging (falls back to RUST_LOG)");
    println!("  OSHC_LOG_TREE=1     Show log spans as an indented tree");
}
