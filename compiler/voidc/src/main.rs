//! Void interpreter CLI
//!
//! `void` starts a REPL; `void <file>` evaluates a file and prints its value.
//! Set `RUST_LOG` (for example `RUST_LOG=void_eval=debug`) to enable tracing.

mod repl;

use std::sync::Once;

use void_eval::Session;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set; safe to call repeatedly.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            if let Err(e) = repl::run(&mut Session::new(), stdin.lock(), stdout.lock()) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some("-h" | "--help" | "help") => print_usage(),
        Some(path) => run_file(path),
    }
}

fn print_usage() {
    println!("Void interpreter");
    println!();
    println!("Usage:");
    println!("  void            Start the interactive REPL");
    println!("  void <file>     Evaluate a file and print its value");
}

fn run_file(path: &str) {
    let source = read_file(path);
    let value = Session::new().evaluate(&source);
    println!("{value}");
    if value.is_error() {
        std::process::exit(1);
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
