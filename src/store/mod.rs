//! Persistence backend for the quote list.
//!
//! The rest of the service only talks to the store through [`ListStore`], so a
//! Redis connection in production and an in-memory list in tests are
//! interchangeable.

mod redis_store;
#[cfg(test)]
mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use redis_store::RedisStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// The list commands the service needs from its key-value store
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Length of the list at `key`, 0 if the key does not exist
    async fn list_len(&self, key: &str) -> Result<usize>;

    /// Remove `key` entirely
    async fn delete(&self, key: &str) -> Result<()>;

    /// Append all `values` to the list at `key` in one command.
    /// Returns the list length after the append.
    async fn push_all(&self, key: &str, values: &[&str]) -> Result<usize>;

    /// Element at `index`, `None` when out of range
    async fn index(&self, key: &str, index: usize) -> Result<Option<String>>;

    /// Liveness probe, returns the server's reply verbatim
    async fn ping(&self) -> Result<String>;

    /// Server metadata, logged once at startup
    async fn server_info(&self) -> Result<String>;
}
