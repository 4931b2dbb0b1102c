use serde::{Deserialize, Serialize};

/// Response type for the random quote endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuoteResponse {
    pub quote: String,
}
