use crate::api::ApiError;
use axum::{http::StatusCode, Json};
use serde_json::json;
use tracing::warn;

pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const REJECTED_MESSAGE: &str = "Failed to analyze journal entry. Please try again.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub login_url: Option<String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
            login_url: None,
        }
    }

    pub fn unauthenticated(login_url: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Authentication required".to_string(),
            login_url: Some(login_url.to_string()),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        warn!("analysis service call failed: {err}");
        let message = match err {
            ApiError::Rejected(_) => REJECTED_MESSAGE,
            ApiError::Transport(_) | ApiError::Malformed(_) | ApiError::InvalidUrl(_) => {
                NETWORK_MESSAGE
            }
        };
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.to_string(),
            login_url: None,
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = match self.login_url {
            Some(login_url) => json!({ "error": self.message, "login_url": login_url }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
