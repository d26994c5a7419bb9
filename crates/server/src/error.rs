use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::services::NotifyError;

/// Transport-level error, mapped onto an HTTP response.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    BadGateway(String),
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

impl From<NotifyError> for AppError {
    fn from(e: NotifyError) -> Self {
        match e {
            NotifyError::InvalidEvent { .. } => AppError::BadRequest(e.to_string()),
            NotifyError::Tmdb(_) | NotifyError::PosterDownload(_) | NotifyError::MissingTitle { .. } => {
                AppError::BadGateway(e.to_string())
            }
            NotifyError::Whatsapp(_) | NotifyError::Io(_) | NotifyError::Pattern(_) => {
                AppError::Internal(e.to_string())
            }
        }
    }
}
