use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::ListStore;

/// In-memory stand-in for Redis used by unit tests
#[derive(Default)]
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<String>>>,
    severed: AtomicBool,
    push_limit: Mutex<Option<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent command fail as if the connection dropped
    pub fn sever(&self) {
        self.severed.store(true, Ordering::SeqCst);
    }

    /// Only store the first `limit` values of each push, to mimic a partial write
    pub fn limit_pushes(&self, limit: usize) {
        *self.push_limit.lock().unwrap() = Some(limit);
    }

    /// Put a list in place directly, bypassing the trait
    pub fn insert_list(&self, key: &str, values: &[&str]) {
        self.lists.lock().unwrap().insert(
            key.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        );
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.lists.lock().unwrap().get(key).cloned().unwrap_or_default()
    }

    fn check_connected(&self) -> Result<()> {
        if self.severed.load(Ordering::SeqCst) {
            bail!("connection reset by peer");
        }
        Ok(())
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn list_len(&self, key: &str) -> Result<usize> {
        self.check_connected()?;
        Ok(self.lists.lock().unwrap().get(key).map_or(0, Vec::len))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.check_connected()?;
        self.lists.lock().unwrap().remove(key);
        Ok(())
    }

    async fn push_all(&self, key: &str, values: &[&str]) -> Result<usize> {
        self.check_connected()?;
        let limit = self.push_limit.lock().unwrap().unwrap_or(values.len());
        let mut lists = self.lists.lock().unwrap();
        let list = lists.entry(key.to_string()).or_default();
        list.extend(values.iter().take(limit).map(|v| v.to_string()));
        Ok(list.len())
    }

    async fn index(&self, key: &str, index: usize) -> Result<Option<String>> {
        self.check_connected()?;
        Ok(self
            .lists
            .lock()
            .unwrap()
            .get(key)
            .and_then(|list| list.get(index).cloned()))
    }

    async fn ping(&self) -> Result<String> {
        self.check_connected()?;
        Ok("PONG".to_string())
    }

    async fn server_info(&self) -> Result<String> {
        self.check_connected()?;
        Ok("# Server\r\nredis_version:memory\r\n".to_string())
    }
}
