//! Plain-text output facade for command handlers.
//!
//! Keeps user-facing text out of the handlers' control flow and gives
//! tests a single seam to swap if output capture is ever needed.

/// Output facade used by every command handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output;

impl Output {
    /// Create a new output facade.
    pub fn new() -> Self {
        Self
    }

    /// Print one line.
    pub fn println(&self, line: &str) {
        println!("{line}");
    }

    /// Print a section header with an underline.
    pub fn header(&self, text: &str) {
        println!("{text}");
        println!("{}", "=".repeat(text.len()));
    }

    /// Print one indented line.
    pub fn indented(&self, line: &str) {
        println!("    {line}");
    }

    /// Print a blank line.
    pub fn newline(&self) {
        println!();
    }
}
