use crate::routes;
use axum::http::StatusCode;

/// GET / handler - Placeholder that answers every unmatched path with an empty 200
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Empty body")
    ),
    tag = "root"
)]
pub async fn root_handler() -> StatusCode {
    StatusCode::OK
}
