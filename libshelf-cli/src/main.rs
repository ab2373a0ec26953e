//! libshelf CLI - command-line interface to the library catalog.

use clap::{Parser, Subcommand};

use libshelf::config::ConfigFile;
use libshelf::logging;

mod commands;
mod error;
mod ui;

use commands::libraries::LibArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "libshelf")]
#[command(version = libshelf::VERSION)]
#[command(about = "Manage the library catalog and installed libraries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commands about libraries
    ///
    /// Use --update-index to refresh the local catalog from the remote
    /// index, or `lib list` to see the status of installed libraries.
    Lib(LibArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = match ConfigFile::load() {
        Ok(config) => config,
        Err(e) => CliError::Config(e.to_string()).exit(),
    };

    let _guard = match logging::init_logging(&config.logging.directory, &config.logging.file) {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    let result = match cli.command {
        Commands::Lib(args) => commands::libraries::run(args, &config),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
