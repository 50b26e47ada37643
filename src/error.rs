use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The main error type for session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Caller-contract violation: a session cannot be created without a user.
    #[error("user_id is required to create a session")]
    MissingUserId,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Standard error response format for session failures.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl SessionError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn cookie(msg: impl Into<String>) -> Self {
        Self::Cookie(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUserId => StatusCode::BAD_REQUEST,
            Self::Config(_)
            | Self::Cookie(_)
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a message safe to expose in client responses.
    ///
    /// Client errors (4xx) keep their message; server errors collapse to a
    /// generic one so database details never leak to clients (CWE-209). The
    /// full error is still logged server-side.
    fn safe_message(&self) -> String {
        match self {
            Self::MissingUserId => self.to_string(),
            Self::Config(_) => "Configuration error".to_string(),
            Self::Cookie(_) => "Cookie error".to_string(),
            Self::Database(_) | Self::Migration(_) => "Database error".to_string(),
            Self::Serialization(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(
            status = status.as_u16(),
            error = %self,
            "Session operation failed"
        );

        let body = Json(ErrorResponse {
            error: self.safe_message(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for session store operations
pub type Result<T> = std::result::Result<T, SessionError>;
