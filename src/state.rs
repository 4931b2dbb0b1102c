use crate::quotes::QuoteRepository;
use crate::store::ListStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub quotes: QuoteRepository,
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self {
            quotes: QuoteRepository::new(store.clone()),
            store,
        }
    }
}
