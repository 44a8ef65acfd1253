use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::actions::ActionError;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
    /// Field-level problems, present for validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not valid JSON or does not match the expected shape
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Vec<String>,
    },

    #[error("admin role required")]
    AdminRequired,

    #[error(transparent)]
    Action(#[from] ActionError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::AdminRequired => StatusCode::FORBIDDEN,
            ApiError::Action(err) => match err {
                ActionError::NotFound(_) => StatusCode::NOT_FOUND,
                ActionError::AlreadyExists(_) => StatusCode::CONFLICT,
                ActionError::Forbidden(_) => StatusCode::FORBIDDEN,
                ActionError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                ActionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        let status = self.status_code();
        let (message, details) = match self {
            ApiError::BadRequest { message, details } => (message.clone(), details.clone()),
            // internal causes stay in the log
            ApiError::Action(ActionError::Internal(_)) => {
                ("Internal server error".to_string(), Vec::new())
            }
            other => (other.to_string(), Vec::new()),
        };

        ErrorResponse {
            message,
            status_code: status.as_u16(),
            details,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: "Invalid request body".to_string(),
            details: vec![rejection.body_text()],
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        details.sort();

        ApiError::BadRequest {
            message: "Validation failed".to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}
