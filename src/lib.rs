pub mod app;
pub mod config;
pub mod database;
pub mod feed;
pub mod http;
pub mod models;
pub mod services;
pub mod types;
pub mod uploads;
pub mod util;

pub use app::App;

#[cfg(test)]
pub(crate) mod test_utils;
