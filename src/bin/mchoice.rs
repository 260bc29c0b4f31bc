//! Command-line interface for mchoice
//! This binary checks submission files against an answer key the way a host
//! framework would, and exposes the intermediate stages for inspection.
//!
//! Usage:
//!   mchoice `<path>` --key `<key>`        - Format check + answer check
//!   mchoice `<path>` --format-only        - Format check only
//!   mchoice `<path>` --tokens             - Print the token stream as JSON
//!   mchoice --render-key --key `<key>`    - Print the key as text

use clap::{Arg, ArgAction, Command};
use mchoice::mchoice::feedback::{
    ANSWER_INSTRUCTION, ANSWER_NEGATIVE_INSTRUCTION, FORMAT_INSTRUCTION,
    FORMAT_NEGATIVE_INSTRUCTION,
};
use mchoice::mchoice::key::AnswerKey;
use mchoice::mchoice::lexer::scan;
use mchoice::mchoice::location::SourceLocation;
use mchoice::mchoice::pipeline::{check_answers, check_format};

fn main() {
    pretty_env_logger::init();

    let matches = Command::new("mchoice")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A validator and answer checker for mchoice submissions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the submission file")
                .required_unless_present("render-key")
                .index(1),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .short('k')
                .help("Path to the answer key file (.yaml or .json)"),
        )
        .arg(
            Arg::new("format-only")
                .long("format-only")
                .help("Run only the format check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream as JSON and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("render-key")
                .long("render-key")
                .help("Print the rendered answer key and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("render-key") {
        let key = load_key(&matches);
        print!("{}", key.render());
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless rendering the key");
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Could not read {}: {}", path, e);
        std::process::exit(2);
    });

    if matches.get_flag("tokens") {
        handle_tokens_command(&source);
        return;
    }

    if matches.get_flag("format-only") {
        handle_format_command(&source);
        return;
    }

    let key = load_key(&matches);
    handle_check_command(&source, &key);
}

/// Load the answer key named by --key, picking the serializer by extension
fn load_key(matches: &clap::ArgMatches) -> AnswerKey {
    let path = matches.get_one::<String>("key").unwrap_or_else(|| {
        eprintln!("An answer key is required; pass --key <path>");
        std::process::exit(2);
    });
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Could not read {}: {}", path, e);
        std::process::exit(2);
    });

    let parsed = if path.ends_with(".json") {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.unwrap_or_else(|e| {
        eprintln!("Could not parse answer key {}: {}", path, e);
        std::process::exit(2);
    })
}

/// Handle the --tokens command
fn handle_tokens_command(source: &str) {
    let output = scan(source);
    let formatted = serde_json::to_string_pretty(&output.tokens).unwrap_or_else(|e| {
        eprintln!("Error formatting tokens: {}", e);
        std::process::exit(2);
    });
    println!("{}", formatted);
}

/// Handle the --format-only command
fn handle_format_command(source: &str) {
    let verdict = check_format(source);

    if verdict.lexing_failed {
        let location = SourceLocation::new(source);
        for span in scan(source).invalid_spans() {
            eprintln!("Invalid character at {}", location.range_start(&span));
        }
    }

    match verdict.message() {
        None => println!("{}", FORMAT_INSTRUCTION),
        Some(message) => {
            println!("{}", FORMAT_NEGATIVE_INSTRUCTION);
            println!("{}", message);
            eprintln!("{} syntax errors", verdict.syntax_error_count);
            std::process::exit(1);
        }
    }
}

/// Handle the default check command: format check, then answer check
fn handle_check_command(source: &str, key: &AnswerKey) {
    let verdict = check_answers(source, key);

    if verdict.passed {
        println!("{}", ANSWER_INSTRUCTION);
        return;
    }

    println!("{}", ANSWER_NEGATIVE_INSTRUCTION);
    if let Some(feedback) = verdict.feedback {
        println!("{}", feedback);
    }
    std::process::exit(1);
}
