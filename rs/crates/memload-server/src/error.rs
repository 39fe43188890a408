use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The random source could not fill a buffer. The store is left untouched.
    #[error("Failed to generate random data")]
    RandomSource(#[from] rand::Error),
    #[error("internal: workload task failed")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::RandomSource(e) => tracing::error!(error = %e, "random fill failed"),
            Self::Worker(e) => tracing::error!(error = %e, "workload task failed"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{self}\n")).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}
