//! Command handlers for the Mica CLI.
//!
//! Each command reads a program file, does its work, and reports faults
//! on stderr with a nonzero exit, while program output itself goes to stdout.

use mica_eval::{Interpreter, Limits, MachineError};
use mica_ir::InstructionStream;

/// Read a program source, reporting failures the way every command does.
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
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Execute a program file against a fresh machine.
///
/// Observation output goes to stdout. The first fault is printed to
/// stderr and exits with status 1.
pub fn run_file(path: &str) {
    let source = read_file(path);
    tracing::debug!(path, bytes = source.len(), "loaded program");
    let mut interpreter = Interpreter::new(Limits::default());
    match interpreter.run(&source) {
        Ok(()) => tracing::debug!("run finished cleanly"),
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    }
}

/// Print the decoded instruction stream of a program file, one numbered
/// instruction per line.
pub fn tokens_file(path: &str) {
    let source = read_file(path);
    let mut stream = InstructionStream::new(&source);
    loop {
        let line = stream.line();
        match stream.next_instruction() {
            Ok(Some(instruction)) => println!("{line:>4}  {instruction}"),
            Ok(None) => return,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn report_error(err: &MachineError) {
    eprintln!("error: {err}");
}
