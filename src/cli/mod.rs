use clap::Parser;
use error_stack::Result;
use thiserror::Error;

mod create_admin;
mod server;

#[derive(Debug, Error)]
#[error("shelf exited with an error")]
pub struct CliError;

/// Command line options for shelf.
#[derive(Debug, Parser)]
#[command(about = "Utility suite for the shelf backend", version, author)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Cli {
    pub fn run(self) -> Result<(), CliError> {
        match self.subcommand {
            Subcommand::Server(args) => self::server::run(args),
            Subcommand::CreateAdmin(args) => self::create_admin::run(args),
        }
    }
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    /// Expose the shelf HTTP API server
    Server(self::server::ServerCommand),
    /// Create or refresh the admin scaffold row
    CreateAdmin(self::create_admin::CreateAdminCommand),
}
