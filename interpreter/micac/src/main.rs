//! Mica CLI
//!
//! Front end for the Mica stack machine.

use micac::commands::{run_file, tokens_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: mica run <file>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: mica tokens <file>");
                std::process::exit(1);
            }
            tokens_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Honors `MICA_LOG` (tracing env-filter syntax); silent by default so
/// diagnostics never mix into program output.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("MICA_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Mica stack machine");
    println!();
    println!("Usage: mica <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  run <file>      Execute a program");
    println!("  tokens <file>   Print the decoded instruction stream");
    println!("  help            Show this help");
}
