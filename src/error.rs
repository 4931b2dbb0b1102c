use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors raised by the quote repository
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The persisted list is empty, so there is no index to pick
    #[error("invalid range: the quote list is empty")]
    InvalidRange,
    /// A store command failed while fetching a quote
    #[error("failed to retrieve a quote: {0:#}")]
    RetrievalFailed(anyhow::Error),
    /// A store command failed while seeding
    #[error("failed to seed quotes: {0:#}")]
    SeedFailed(anyhow::Error),
    /// The store reported a different list length than expected after seeding
    #[error("seeding inserted {inserted} quotes instead of {expected}")]
    SeedMismatch { expected: usize, inserted: usize },
}

/// Error type for HTTP endpoints
///
/// Every failure is surfaced as a 500 with the error text as a plain-text
/// body. Clients get no structured error code.
#[derive(Debug)]
pub enum ApiError {
    /// Quote repository error
    Quote(QuoteError),
    /// Store command error outside the repository (health probe)
    Store(anyhow::Error),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::Quote(err) => err.to_string(),
            ApiError::Store(err) => format!("{:#}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.message()).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError::Quote(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
