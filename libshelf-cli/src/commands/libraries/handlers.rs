//! Command handlers for the `lib` subcommand.

use tracing::info;

use libshelf::index::IndexStore;
use libshelf::manager::{
    status_context, HttpIndexClient, IndexFetcher, LibraryStatus, LocalLibraryStore,
};

use super::args::{ListArgs, UpdateIndexArgs};
use crate::commands::traits::{CommandContext, CommandHandler};
use crate::error::CliError;

// ============================================================================
// List Handler
// ============================================================================

/// Handler for the `lib list` command.
pub struct ListHandler;

impl CommandHandler for ListHandler {
    type Args = ListArgs;

    fn execute(args: Self::Args, ctx: &CommandContext) -> Result<(), CliError> {
        let index_store = IndexStore::new(&args.index_path);
        let libraries = LocalLibraryStore::new(&args.libraries_dir);

        let context = status_context(&index_store, &libraries)?;

        if context.is_empty() {
            ctx.output.println("No libraries installed.");
            return Ok(());
        }

        ctx.output
            .header(&format!("Installed Libraries ({})", context.len()));
        ctx.output.newline();

        for row in context.results() {
            match row.status {
                LibraryStatus::Unknown => ctx.output.println(&format!("  {}", row.name)),
                status => ctx
                    .output
                    .println(&format!("  {} - {}", row.name, status.label())),
            }
            if let Some(note) = &row.error {
                ctx.output.indented(note);
            }
        }

        Ok(())
    }
}

// ============================================================================
// Update Index Handler
// ============================================================================

/// Handler for `lib --update-index`.
pub struct UpdateIndexHandler;

impl CommandHandler for UpdateIndexHandler {
    type Args = UpdateIndexArgs;

    fn execute(args: Self::Args, ctx: &CommandContext) -> Result<(), CliError> {
        info!(url = args.url.as_str(), "updating index");
        ctx.output.println("Updating the library index...");

        let client = HttpIndexClient::new();
        let payload = client.fetch_index(&args.url)?;

        let store = IndexStore::new(&args.index_path);
        let index = store
            .refresh(&payload)
            .map_err(libshelf::manager::ManagerError::from)?;

        ctx.output.println(&format!(
            "Index updated: {} libraries known.",
            index.len()
        ));
        ctx.output.println("Done.");
        Ok(())
    }
}
