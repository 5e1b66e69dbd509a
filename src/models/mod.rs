use thiserror::Error;

pub mod admin;
pub mod id;
pub mod post;
pub mod saved_post;

pub use admin::Admin;
pub use post::Post;
pub use saved_post::{SavedPost, SavedPostView};

#[derive(Debug, Error)]
#[error("Database query failed")]
pub struct QueryError;
