use actix_web::{web, HttpServer};
use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use crate::{config, App};

pub mod controllers;
pub mod error;
pub mod session;

pub use error::Error;
pub use session::AdminSession;

#[derive(Debug, Error)]
#[error("Failed to start the shelf HTTP server")]
pub struct StartServerError;

/// Runs the HTTP API until the server shuts down.
pub async fn run(config: config::Server) -> Result<(), StartServerError> {
    let app = App::new(config).await.change_context(StartServerError)?;
    let addr = (app.config.ip, app.config.port);
    let workers = app.config.workers;

    tracing::info!(ip = %addr.0, port = addr.1, "starting shelf server");

    HttpServer::new(move || {
        actix_web::App::new()
            .app_data(web::Data::new(app.clone()))
            .wrap(TracingLogger::default())
            .configure(controllers::configure)
    })
    .workers(workers)
    .bind(addr)
    .change_context(StartServerError)
    .attach_printable("could not bind the listen address")?
    .run()
    .await
    .change_context(StartServerError)
}
