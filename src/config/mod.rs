use thiserror::Error;

mod auth;
mod database;
mod server;
mod uploads;

pub use auth::AdminAuth;
pub use database::Database;
pub use server::Server;
pub use uploads::Uploads;

#[derive(Debug, Error)]
#[error("Failed to load configuration")]
pub struct ParseError;
