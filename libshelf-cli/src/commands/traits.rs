//! Shared command plumbing.

use crate::error::CliError;
use crate::ui::Output;

/// Execution context passed to every command handler.
pub struct CommandContext {
    /// Output facade for user-facing text.
    pub output: Output,
}

impl CommandContext {
    /// Create a context with the default output facade.
    pub fn new() -> Self {
        Self {
            output: Output::new(),
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A CLI command handler.
///
/// Handlers hold no state; arguments are resolved (CLI flags merged with
/// config defaults) before execution.
pub trait CommandHandler {
    /// Resolved argument type for this handler.
    type Args;

    /// Run the command.
    fn execute(args: Self::Args, ctx: &CommandContext) -> Result<(), CliError>;
}
