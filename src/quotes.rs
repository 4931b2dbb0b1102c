use std::sync::Arc;

use rand::Rng;

use crate::error::QuoteError;
use crate::store::ListStore;

/// Key holding the persisted quote list
pub const QUOTES_KEY: &str = "quotes";

/// The fixed set of quotes served by the service, in storage order
pub const CANONICAL_QUOTES: &[&str] = &[
    "Je voudrais déjà être roi",
    "Libérée Delivrée je ne mentirais plus jamais",
    "Un jour mon prince viendras",
    "Hakuna Matata",
];

/// Which branch of the seeding protocol ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The list already had the canonical length; nothing was written
    AlreadySeeded,
    /// The list was empty and has been written
    Seeded,
    /// The list had the wrong length and has been deleted and rewritten
    Repaired { previous_len: usize },
}

/// Quote list persisted in a [`ListStore`]
#[derive(Clone)]
pub struct QuoteRepository {
    store: Arc<dyn ListStore>,
}

impl QuoteRepository {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    /// Make the persisted list match [`CANONICAL_QUOTES`]
    ///
    /// Safe to run on every startup. Only the list length is compared, so a
    /// list with the right number of entries is accepted as is. A list with
    /// any other non-zero length is deleted and rewritten in one `RPUSH`.
    ///
    /// # Errors
    /// Returns `SeedFailed` if a store command fails, or `SeedMismatch` if the
    /// list length reported after the push is not the canonical length.
    pub async fn seed(&self) -> Result<SeedOutcome, QuoteError> {
        let expected = CANONICAL_QUOTES.len();

        tracing::info!("Checking persisted quotes...");
        let existing = self
            .store
            .list_len(QUOTES_KEY)
            .await
            .map_err(QuoteError::SeedFailed)?;

        if existing == expected {
            tracing::info!("All {} quotes are already stored", existing);
            return Ok(SeedOutcome::AlreadySeeded);
        }

        if existing > 0 {
            tracing::warn!(
                "Stored quote list has {} entries instead of {}, deleting it",
                existing,
                expected
            );
            self.store
                .delete(QUOTES_KEY)
                .await
                .map_err(QuoteError::SeedFailed)?;
        }

        tracing::info!("Inserting {} quotes...", expected);
        let inserted = self
            .store
            .push_all(QUOTES_KEY, CANONICAL_QUOTES)
            .await
            .map_err(QuoteError::SeedFailed)?;

        if inserted != expected {
            return Err(QuoteError::SeedMismatch { expected, inserted });
        }
        tracing::info!("Inserted {}/{} quotes", inserted, expected);

        if existing > 0 {
            Ok(SeedOutcome::Repaired {
                previous_len: existing,
            })
        } else {
            Ok(SeedOutcome::Seeded)
        }
    }

    /// Fetch one quote chosen uniformly at random
    ///
    /// The list length is read on every call rather than cached.
    pub async fn random_quote(&self) -> Result<String, QuoteError> {
        let len = self
            .store
            .list_len(QUOTES_KEY)
            .await
            .map_err(QuoteError::RetrievalFailed)?;

        if len == 0 {
            return Err(QuoteError::InvalidRange);
        }

        let index = rand::rng().random_range(0..len);

        self.store
            .index(QUOTES_KEY, index)
            .await
            .map_err(QuoteError::RetrievalFailed)?
            .ok_or(QuoteError::InvalidRange)
    }
}
