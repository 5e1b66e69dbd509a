use chrono::{NaiveDateTime, Utc};
use error_stack::{Report, Result, ResultExt};
use serde::Serialize;
use sqlx::FromRow;
use thiserror::Error;

use super::id::PostId;
use super::QueryError;
use crate::database::Connection;

/// A single curated link entry with metadata and a thumbnail image.
///
/// Only active posts appear in the public feed; inactive posts remain in
/// the store and are visible to the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub facebook_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl Post {
    #[tracing::instrument(skip_all, name = "db.posts.find")]
    pub async fn find(conn: &mut Connection, id: PostId) -> Result<Option<Self>, QueryError> {
        sqlx::query_as::<_, Self>("SELECT * FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not find post by id")
    }

    /// Lists posts, newest first.
    #[tracing::instrument(skip_all, name = "db.posts.list")]
    pub async fn list(conn: &mut Connection, active_only: bool) -> Result<Vec<Self>, QueryError> {
        let query = if active_only {
            "SELECT * FROM posts WHERE is_active = TRUE ORDER BY created_at DESC"
        } else {
            "SELECT * FROM posts ORDER BY created_at DESC"
        };

        sqlx::query_as::<_, Self>(query)
            .fetch_all(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not list posts")
    }

    #[tracing::instrument(skip_all, name = "db.posts.set_active")]
    pub async fn set_active(
        conn: &mut Connection,
        id: PostId,
        is_active: bool,
    ) -> Result<Option<Self>, QueryError> {
        sqlx::query_as::<_, Self>("UPDATE posts SET is_active = ? WHERE id = ? RETURNING *")
            .bind(is_active)
            .bind(id)
            .fetch_optional(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not update post active flag")
    }

    /// Removes the row. Returns whether a row existed.
    #[tracing::instrument(skip_all, name = "db.posts.delete")]
    pub async fn delete(conn: &mut Connection, id: PostId) -> Result<bool, QueryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not delete post")?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug)]
pub struct InsertPost<'a> {
    pub facebook_url: &'a str,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub thumbnail_url: &'a str,
}

#[derive(Debug, Error)]
#[error("Could not insert post")]
pub struct InsertPostError;

impl InsertPost<'_> {
    #[tracing::instrument(skip_all, name = "db.posts.insert")]
    pub async fn insert(&self, conn: &mut Connection) -> Result<Post, InsertPostError> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (id, facebook_url, title, description, thumbnail_url, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?, TRUE, ?) RETURNING *",
        )
        .bind(PostId::generate())
        .bind(self.facebook_url)
        .bind(self.title)
        .bind(self.description)
        .bind(self.thumbnail_url)
        .bind(Utc::now().naive_utc())
        .fetch_one(conn)
        .await
        .map_err(|e| Report::new(e).change_context(InsertPostError))
    }
}
