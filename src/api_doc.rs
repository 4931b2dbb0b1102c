use utoipa::OpenApi;

use crate::handlers;
use crate::models::QuoteResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "quote-kv API",
        version = "1.0.0",
        description = "Serves a random quote from a fixed list stored in Redis"
    ),
    paths(
        handlers::health::health_handler,
        handlers::quote::random_quote_handler,
        handlers::root::root_handler
    ),
    components(schemas(QuoteResponse)),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "quotes", description = "Quote retrieval"),
        (name = "root", description = "Catch-all placeholder")
    )
)]
pub struct ApiDoc;
