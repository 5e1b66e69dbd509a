use chrono::{NaiveDateTime, Utc};
use error_stack::{Report, Result};
use sha2::Digest;
use sqlx::FromRow;
use thiserror::Error;

use super::id::AdminId;
use crate::database::Connection;

/// Administrative-user scaffold with hashed passwords.
///
/// Rows here are managed by the `create-admin` CLI subcommand and are not
/// consulted by the cookie-based authentication path, which only checks
/// the configured shared-secret credential pair.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Admin {
    pub id: AdminId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

pub fn hash_password(email: &str, password: &str) -> String {
    let mut hasher = sha2::Sha512::default();
    hasher.update(format!("{email}:{password}"));
    hex::encode(hasher.finalize())
}

#[derive(Debug)]
pub struct UpsertAdmin<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Error)]
#[error("Could not upsert admin")]
pub struct UpsertAdminError;

impl UpsertAdmin<'_> {
    #[tracing::instrument(skip_all, name = "db.admins.upsert")]
    pub async fn upsert(&self, conn: &mut Connection) -> Result<Admin, UpsertAdminError> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, email, name, password_hash, created_at) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (email) DO UPDATE \
             SET name = excluded.name, password_hash = excluded.password_hash \
             RETURNING *",
        )
        .bind(AdminId::generate())
        .bind(self.email)
        .bind(self.name)
        .bind(self.password_hash)
        .bind(Utc::now().naive_utc())
        .fetch_one(conn)
        .await
        .map_err(|e| Report::new(e).change_context(UpsertAdminError))
    }
}
