//! Argument types for the `lib` subcommand.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for `libshelf lib`.
#[derive(Args)]
pub struct LibArgs {
    /// Fetch the remote catalog and refresh the local index file
    #[arg(long)]
    pub update_index: bool,

    #[command(subcommand)]
    pub command: Option<LibCommands>,
}

/// `lib` subcommands.
#[derive(Subcommand)]
pub enum LibCommands {
    /// Show the status of installed libraries against the catalog
    List {
        /// Libraries directory (default: from config)
        #[arg(long)]
        libraries_dir: Option<PathBuf>,

        /// Catalog index file (default: from config)
        #[arg(long)]
        index_path: Option<PathBuf>,
    },
}

// ============================================================================
// Handler Argument Structs
// ============================================================================

/// Resolved arguments for the list command.
pub struct ListArgs {
    pub libraries_dir: PathBuf,
    pub index_path: PathBuf,
}

/// Resolved arguments for the update-index command.
pub struct UpdateIndexArgs {
    pub url: String,
    pub index_path: PathBuf,
}
