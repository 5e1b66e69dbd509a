use chrono::{NaiveDateTime, Utc};
use error_stack::{Report, Result, ResultExt};
use serde::Serialize;
use sqlx::FromRow;
use thiserror::Error;

use super::id::{PostId, SavedPostId};
use super::{Post, QueryError};
use crate::database::Connection;

/// A bookmark marker referencing a [`Post`].
///
/// At most one marker exists per post at any time. `post_id` is not a
/// foreign key: a marker may outlive its post and is dropped when the
/// saved view is materialized.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPost {
    pub id: SavedPostId,
    pub post_id: PostId,
    pub saved_at: NaiveDateTime,
}

/// A saved marker resolved against the live post table, as returned by
/// the saved-list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPostView {
    #[serde(flatten)]
    pub post: Post,
    pub saved_id: SavedPostId,
    pub saved_at: NaiveDateTime,
}

impl SavedPost {
    #[tracing::instrument(skip_all, name = "db.saved_posts.find_by_post")]
    pub async fn find_by_post(
        conn: &mut Connection,
        post_id: PostId,
    ) -> Result<Option<Self>, QueryError> {
        sqlx::query_as::<_, Self>("SELECT * FROM saved_posts WHERE post_id = ?")
            .bind(post_id)
            .fetch_optional(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not find saved post by post id")
    }

    /// Lists markers, newest-saved first.
    #[tracing::instrument(skip_all, name = "db.saved_posts.list")]
    pub async fn list(conn: &mut Connection) -> Result<Vec<Self>, QueryError> {
        sqlx::query_as::<_, Self>("SELECT * FROM saved_posts ORDER BY saved_at DESC")
            .fetch_all(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not list saved posts")
    }

    #[tracing::instrument(skip_all, name = "db.saved_posts.delete")]
    pub async fn delete(conn: &mut Connection, id: SavedPostId) -> Result<bool, QueryError> {
        let result = sqlx::query("DELETE FROM saved_posts WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await
            .change_context(QueryError)
            .attach_printable("could not delete saved post")?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug)]
pub struct InsertSavedPost {
    pub post_id: PostId,
}

#[derive(Debug, Error)]
pub enum InsertSavedPostError {
    #[error("Post is already saved")]
    AlreadySaved,
    #[error("Could not insert saved post")]
    Internal,
}

impl InsertSavedPost {
    #[tracing::instrument(skip_all, name = "db.saved_posts.insert")]
    pub async fn insert(&self, conn: &mut Connection) -> Result<SavedPost, InsertSavedPostError> {
        sqlx::query_as::<_, SavedPost>(
            "INSERT INTO saved_posts (id, post_id, saved_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(SavedPostId::generate())
        .bind(self.post_id)
        .bind(Utc::now().naive_utc())
        .fetch_one(conn)
        .await
        .map_err(|e| {
            let context = match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    InsertSavedPostError::AlreadySaved
                }
                _ => InsertSavedPostError::Internal,
            };
            Report::new(e).change_context(context)
        })
    }
}
