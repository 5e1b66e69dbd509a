use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

/// Wire representation of every failure the API can report.
///
/// `InvalidRequest` carries the human-readable reason; the rest are unit
/// variants whose detail stays in the server-side logs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Error {
    Internal,
    InvalidRequest { message: Cow<'static, str> },
    Unauthorized,
    NotFound,
    AlreadySaved,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Internal => f.write_str("Failed to perform request"),
            Error::InvalidRequest { message } => f.write_str(message),
            Error::Unauthorized => f.write_str("Authentication required"),
            Error::NotFound => f.write_str("Resource was not found"),
            Error::AlreadySaved => f.write_str("Post already saved"),
        }
    }
}
