use axum::http::StatusCode;
use std::fmt;

/// Why a store operation failed. The aggregation code never sees these;
/// handlers turn them into HTTP responses.
#[derive(Debug)]
pub enum StoreError {
    NotFound,
    AuthFailed,
    Io(String),
}

impl StoreError {
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::AuthFailed,
            _ => Self::Io(err.to_string()),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "data store not found"),
            Self::AuthFailed => write!(f, "data store access denied"),
            Self::Io(message) => write!(f, "data store i/o error: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
