//! The `lib` subcommand: catalog refresh and installed-library status.

mod args;
mod handlers;

pub use args::{LibArgs, LibCommands, ListArgs, UpdateIndexArgs};

use clap::CommandFactory;
use tracing::warn;

use libshelf::config::ConfigFile;

use super::traits::{CommandContext, CommandHandler};
use crate::error::{CliError, EXIT_BAD_CALL};
use handlers::{ListHandler, UpdateIndexHandler};

/// Dispatch the `lib` subcommand.
///
/// `--update-index` refreshes the local catalog; `list` prints the status
/// report. An invocation with nothing actionable prints help and exits
/// with the bad-call code.
pub fn run(args: LibArgs, config: &ConfigFile) -> Result<(), CliError> {
    let ctx = CommandContext::new();

    match args.command {
        Some(LibCommands::List {
            libraries_dir,
            index_path,
        }) => {
            let resolved = ListArgs {
                libraries_dir: libraries_dir.unwrap_or_else(|| config.libraries.directory.clone()),
                index_path: index_path.unwrap_or_else(|| config.index.path.clone()),
            };
            ListHandler::execute(resolved, &ctx)
        }
        None if args.update_index => {
            let resolved = UpdateIndexArgs {
                url: config.index.url.clone(),
                index_path: config.index.path.clone(),
            };
            UpdateIndexHandler::execute(resolved, &ctx)
        }
        None => {
            warn!("bad call, printing help");
            print_lib_help();
            std::process::exit(EXIT_BAD_CALL);
        }
    }
}

fn print_lib_help() {
    let mut cli = crate::Cli::command();
    if let Some(lib) = cli.find_subcommand_mut("lib") {
        let _ = lib.print_help();
    }
}
