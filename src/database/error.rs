use error_stack::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid database url")]
    InvalidUrl,
    #[error("Failed to run database migrations")]
    Migrate,
    #[error("Database pool is unhealthy")]
    UnhealthyPool,
    #[error("Internal database error")]
    Internal(#[source] sqlx::Error),
}

pub trait ErrorExt {
    fn is_unhealthy(&self) -> bool;
}

impl ErrorExt for Report<Error> {
    fn is_unhealthy(&self) -> bool {
        matches!(self.current_context(), Error::UnhealthyPool)
    }
}

pub(crate) trait SqlxErrorExt<T> {
    fn into_db_error(self) -> error_stack::Result<T, Error>;
}

impl<T> SqlxErrorExt<T> for Result<T, sqlx::Error> {
    fn into_db_error(self) -> error_stack::Result<T, Error> {
        self.map_err(|e| Report::new(Error::Internal(e)))
    }
}
