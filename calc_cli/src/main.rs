//! # Keypad CLI Application
//!
//! Terminal front end for the calculator engine.
//!
//! ```text
//! calc_cli --keys "5+3*2="        # one-shot
//! calc_cli                        # interactive, one key string per line
//! calc_cli --json --ascii         # JSON snapshots, ASCII operators
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::{CalcError, CalcResult, Calculator, CalculatorSettings, CalculatorSnapshot, SymbolStyle};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Keypad calculator in the terminal")]
struct Args {
    /// Keys to press, e.g. "12+3=" (starts an interactive session when omitted)
    #[arg(short, long)]
    keys: Option<String>,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Use ASCII operator symbols in history text
    #[arg(long)]
    ascii: bool,

    /// JSON settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            report_error(&e, args.json);
            return ExitCode::FAILURE;
        }
    };
    let mut calc = Calculator::with_settings(settings);

    match &args.keys {
        Some(keys) => match calc.press_keys(keys) {
            Ok(snapshot) => {
                print_snapshot(&snapshot, args.json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                report_error(&e, args.json);
                ExitCode::FAILURE
            }
        },
        None => {
            run_session(&mut calc, args.json);
            ExitCode::SUCCESS
        }
    }
}

fn load_settings(args: &Args) -> CalcResult<CalculatorSettings> {
    let mut settings = match &args.settings {
        Some(path) => CalculatorSettings::load(path)?,
        None => CalculatorSettings::default(),
    };
    if args.ascii {
        settings.symbol_style = SymbolStyle::Ascii;
    }
    Ok(settings)
}

fn run_session(calc: &mut Calculator, json: bool) {
    if !json {
        println!("Keypad Calculator");
        println!("=================");
        println!("Keys: 0-9 . + - * / = c (clear) ~ (sign) % (percent). 'quit' to exit.");
        println!();
        print_snapshot(&calc.snapshot(), json);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !json {
            print!("> ");
            if io::stdout().flush().is_err() {
                return;
            }
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "failed to read input");
                return;
            }
            None => return,
        };

        let input = line.trim();
        if matches!(input, "quit" | "exit" | "q") {
            return;
        }

        match calc.press_keys(input) {
            Ok(snapshot) => print_snapshot(&snapshot, json),
            Err(e) => report_error(&e, json),
        }
    }
}

fn print_snapshot(snapshot: &CalculatorSnapshot, json: bool) {
    if json {
        if let Ok(text) = serde_json::to_string(snapshot) {
            println!("{}", text);
        }
        return;
    }

    if !snapshot.history_text.is_empty() {
        println!("  {}", snapshot.history_text);
    }
    println!("  {}{}", snapshot.display_text, status_marker(snapshot.has_error));
}

fn report_error(error: &CalcError, json: bool) {
    if json {
        if let Ok(text) = serde_json::to_string(error) {
            eprintln!("{}", text);
        }
    } else {
        eprintln!("Error: {}", error);
    }
}

fn status_marker(has_error: bool) -> &'static str {
    if has_error { "  [ERROR]" } else { "" }
}
