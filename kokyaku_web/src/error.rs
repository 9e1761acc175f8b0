use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kokyaku::domain::customer::{CustomerError, ValidationErrors};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

const VALIDATION_MESSAGE: &str = "One or more validation errors occurred.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
    #[error("Malformed customer id: {0}")]
    MalformedPath(#[from] PathRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Customer(CustomerError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::MalformedBody(_) | ApiError::MalformedPath(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("リクエストエラー: {} {}", status, self);
        let body = match &self {
            ApiError::Customer(error) => json!({ "message": error.to_string() }),
            ApiError::Validation(errors) => json!({
                "message": VALIDATION_MESSAGE,
                "errors": errors,
            }),
            ApiError::MalformedBody(rejection) => json!({
                "message": VALIDATION_MESSAGE,
                "errors": { "body": [rejection.to_string()] },
            }),
            ApiError::MalformedPath(rejection) => json!({
                "message": VALIDATION_MESSAGE,
                "errors": { "id": [rejection.to_string()] },
            }),
        };
        (status, Json(body)).into_response()
    }
}
