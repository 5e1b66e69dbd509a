use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;

use super::Error;
use crate::models::saved_post::InsertSavedPostError;
use crate::models::{post::InsertPostError, QueryError};
use crate::database;
use crate::types::Error as ErrorType;
use crate::uploads::UploadError;

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ErrorType::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::AlreadySaved => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        // the report and span trace stay in the logs
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        HttpResponse::build(self.status_code()).json(&self.error_type)
    }
}

impl From<Report<database::Error>> for Error {
    fn from(value: Report<database::Error>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<Report<QueryError>> for Error {
    fn from(value: Report<QueryError>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<Report<InsertPostError>> for Error {
    fn from(value: Report<InsertPostError>) -> Self {
        Error::from_report(ErrorType::Internal, value)
    }
}

impl From<Report<InsertSavedPostError>> for Error {
    fn from(value: Report<InsertSavedPostError>) -> Self {
        match value.current_context() {
            InsertSavedPostError::AlreadySaved => {
                Error::from_report(ErrorType::AlreadySaved, value)
            }
            InsertSavedPostError::Internal => Error::from_report(ErrorType::Internal, value),
        }
    }
}

impl From<Report<UploadError>> for Error {
    fn from(value: Report<UploadError>) -> Self {
        match value.current_context() {
            UploadError::Store => Error::from_report(ErrorType::Internal, value),
            context => {
                let message = context.to_string();
                Error::from_report(ErrorType::InvalidRequest { message: message.into() }, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    fn status_of(error_type: ErrorType) -> StatusCode {
        Error::new(error_type).status_code()
    }

    #[test]
    fn status_codes_follow_the_wire_contract() {
        assert_eq!(
            status_of(ErrorType::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ErrorType::InvalidRequest {
                message: "bad".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ErrorType::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(ErrorType::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(ErrorType::AlreadySaved), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn response_body_is_the_wire_error() {
        let response = Error::new(ErrorType::AlreadySaved).error_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "already_saved" }));
    }

    #[tokio::test]
    async fn invalid_request_body_carries_the_message() {
        let response = Error::invalid_request("Invalid Facebook URL").error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "invalid_request",
                "message": "Invalid Facebook URL",
            })
        );
    }
}
