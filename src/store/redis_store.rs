use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncConnectionConfig, Client};
use tokio::sync::Mutex;

use super::ListStore;

/// Single long-lived Redis connection shared by every request
///
/// Commands go through a mutex so sequences issued by one caller are never
/// interleaved with another caller's commands on the wire.
pub struct RedisStore {
    conn: Mutex<MultiplexedConnection>,
}

impl RedisStore {
    /// Connect to Redis at `url`, giving up after `timeout`
    ///
    /// After connecting, `INFO SERVER` is issued to confirm the server answers
    /// and its metadata is logged. There is no retry: any failure is returned
    /// to the caller. Only the connect is bounded; later commands have no
    /// response timeout.
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::open(url).with_context(|| format!("Invalid Redis address: {}", url))?;

        tracing::info!("Connecting to Redis at {} (timeout {:?})", url, timeout);

        let config = AsyncConnectionConfig::new()
            .set_connection_timeout(Some(timeout))
            .set_response_timeout(None);

        let conn = tokio::time::timeout(
            timeout,
            client.get_multiplexed_async_connection_with_config(&config),
        )
        .await
        .map_err(|_| anyhow!("Timed out after {:?} connecting to Redis at {}", timeout, url))?
        .with_context(|| format!("Failed to connect to Redis at {}", url))?;

        let store = Self {
            conn: Mutex::new(conn),
        };

        let info = store.server_info().await?;
        tracing::info!("Connected to Redis:\n{}", info.trim_end());

        Ok(store)
    }
}

#[async_trait]
impl ListStore for RedisStore {
    async fn list_len(&self, key: &str) -> Result<usize> {
        let mut conn = self.conn.lock().await;
        let len: usize = redis::cmd("LLEN")
            .arg(key)
            .query_async(&mut *conn)
            .await
            .with_context(|| format!("LLEN {} failed", key))?;
        Ok(len)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.lock().await;
        let removed: usize = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut *conn)
            .await
            .with_context(|| format!("DEL {} failed", key))?;
        tracing::debug!("Deleted {} key(s) named {}", removed, key);
        Ok(())
    }

    async fn push_all(&self, key: &str, values: &[&str]) -> Result<usize> {
        let mut conn = self.conn.lock().await;
        let len: usize = redis::cmd("RPUSH")
            .arg(key)
            .arg(values)
            .query_async(&mut *conn)
            .await
            .with_context(|| format!("RPUSH {} failed", key))?;
        Ok(len)
    }

    async fn index(&self, key: &str, index: usize) -> Result<Option<String>> {
        let mut conn = self.conn.lock().await;
        let value: Option<String> = redis::cmd("LINDEX")
            .arg(key)
            .arg(index)
            .query_async(&mut *conn)
            .await
            .with_context(|| format!("LINDEX {} {} failed", key, index))?;
        Ok(value)
    }

    async fn ping(&self) -> Result<String> {
        let mut conn = self.conn.lock().await;
        let pong: String = redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .context("PING failed")?;
        Ok(pong)
    }

    async fn server_info(&self) -> Result<String> {
        let mut conn = self.conn.lock().await;
        let info: String = redis::cmd("INFO")
            .arg("SERVER")
            .query_async(&mut *conn)
            .await
            .context("INFO SERVER failed")?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::net::TcpListener;

    const TEST_KEY: &str = "quote-kv:test:list";

    fn test_redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisStore>();
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisStore::connect("not a url", Duration::from_secs(1)).await;
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("Invalid Redis address"));
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Nothing listens on port 1
        let result = RedisStore::connect("redis://127.0.0.1:1", Duration::from_secs(2)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connect_waits_for_configured_timeout() {
        // Accepts connections and never answers the handshake
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let timeout = Duration::from_secs(3);
        let started = Instant::now();
        let result = RedisStore::connect(&format!("redis://{}", addr), timeout).await;
        let elapsed = started.elapsed();

        assert!(result.is_err());
        assert!(
            elapsed >= Duration::from_millis(2500),
            "gave up after {:?}, configured {:?}",
            elapsed,
            timeout
        );
        assert!(elapsed < Duration::from_secs(10));
    }

    #[tokio::test]
    #[ignore = "requires a running Redis (set REDIS_URL)"]
    async fn test_list_commands_against_redis() {
        let store = RedisStore::connect(&test_redis_url(), Duration::from_secs(5))
            .await
            .expect("Failed to connect to Redis");

        store.delete(TEST_KEY).await.unwrap();
        assert_eq!(store.list_len(TEST_KEY).await.unwrap(), 0);

        let len = store.push_all(TEST_KEY, &["a", "b", "c"]).await.unwrap();
        assert_eq!(len, 3);
        assert_eq!(store.list_len(TEST_KEY).await.unwrap(), 3);
        assert_eq!(store.index(TEST_KEY, 1).await.unwrap(), Some("b".to_string()));
        assert_eq!(store.index(TEST_KEY, 3).await.unwrap(), None);

        store.delete(TEST_KEY).await.unwrap();
        assert_eq!(store.list_len(TEST_KEY).await.unwrap(), 0);
    }

    #[tokio::test]
    #[ignore = "requires a running Redis (set REDIS_URL)"]
    async fn test_ping_and_info_against_redis() {
        let store = RedisStore::connect(&test_redis_url(), Duration::from_secs(5))
            .await
            .expect("Failed to connect to Redis");

        assert_eq!(store.ping().await.unwrap(), "PONG");
        assert!(store.server_info().await.unwrap().contains("redis_version"));
    }
}
