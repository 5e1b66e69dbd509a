use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{config, database};

#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    db: database::Pool,
}

#[derive(Debug, Error)]
#[error("Failed to initialize App struct")]
pub struct AppError;

impl App {
    #[tracing::instrument]
    pub async fn new(cfg: config::Server) -> Result<Self, AppError> {
        let db = database::Pool::new(&cfg.db)
            .await
            .change_context(AppError)?;

        db.migrate().await.change_context(AppError)?;

        Ok(Self {
            config: Arc::new(cfg),
            db,
        })
    }
}

impl App {
    #[tracing::instrument(skip_all)]
    pub async fn db(&self) -> Result<database::PoolConnection, database::Error> {
        self.db.get().await
    }

    #[tracing::instrument(skip_all)]
    pub async fn db_transaction(&self) -> Result<database::Transaction<'static>, database::Error> {
        self.db.begin().await
    }
}
