use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// GET /healthz handler - Health check endpoint
///
/// Pings Redis and returns its reply verbatim (normally `PONG`).
/// Returns 500 with the error text if the store cannot be reached.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Store is reachable", body = String, content_type = "text/plain"),
        (status = 500, description = "Store is unreachable", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, String), ApiError> {
    match state.store.ping().await {
        Ok(pong) => {
            tracing::debug!("Health check passed");
            Ok((StatusCode::OK, pong))
        }
        Err(e) => {
            tracing::error!("Health check failed: {:#}", e);
            Err(ApiError::Store(e))
        }
    }
}
