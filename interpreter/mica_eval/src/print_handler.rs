//! Print handler for configurable output.
//!
//! The observation instructions (`top`, `val`, `par`) each append one
//! line to the run's output stream. Where that stream goes is the
//! embedder's choice:
//! - CLI: stdout (default)
//! - Driver/diff harness: buffer for capture and comparison
//! - Tests: buffer for assertions
//!
//! Enum dispatch instead of trait objects: the destination set is
//! fixed and this sits on the only output path the machine has.

use parking_lot::Mutex;

/// Destination for observation output.
pub enum PrintHandler {
    /// Write each line to stdout (default).
    Stdout,
    /// Capture lines into a buffer for later inspection.
    Buffer(Mutex<String>),
    /// Discard all output silently.
    Silent,
}

impl PrintHandler {
    /// A capturing handler with an empty buffer.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(Mutex::new(String::new()))
    }

    /// Emit one output line (newline appended).
    pub fn println(&self, line: &str) {
        match self {
            PrintHandler::Stdout => println!("{line}"),
            PrintHandler::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            PrintHandler::Silent => {}
        }
    }

    /// Everything captured so far.
    ///
    /// Empty for the stdout and silent handlers, which do not capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buffer) => buffer.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }

    /// Drop captured output. No-op for non-capturing handlers.
    pub fn clear(&self) {
        if let PrintHandler::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        PrintHandler::Stdout
    }
}
