// Route path constants - single source of truth for all API paths

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const QUOTE_RANDOM: &str = "/quote/random";
pub const HEALTH: &str = "/healthz";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
///
/// `/` answers every method, and unknown paths fall through to the root
/// handler, both with an empty 200.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_RANDOM, get(handlers::random_quote_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(ROOT, any(handlers::root_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(handlers::root_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
