use crate::error::ApiError;
use crate::models::QuoteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /quote/random handler - Return one quote picked at random
#[utoipa::path(
    get,
    path = routes::QUOTE_RANDOM,
    responses(
        (status = 200, description = "A random quote", body = QuoteResponse),
        (status = 500, description = "Quote could not be retrieved", body = String, content_type = "text/plain")
    ),
    tag = "quotes"
)]
pub async fn random_quote_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<QuoteResponse>), ApiError> {
    let quote = state.quotes.random_quote().await.map_err(|e| {
        tracing::error!("Failed to retrieve a quote: {}", e);
        ApiError::from(e)
    })?;

    tracing::info!("Handled a quote request, returned: '{}'", quote);
    Ok((StatusCode::OK, Json(QuoteResponse { quote })))
}
