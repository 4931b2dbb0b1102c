use std::time::Duration;

use clap::Parser;

/// Service configuration, read from command-line flags with environment fallbacks
#[derive(Debug, Clone, Parser)]
#[command(name = "quote-kv", version, about = "Serves random quotes stored in Redis")]
pub struct Config {
    /// host:port on which to listen
    #[arg(long, env = "LISTEN_ADDR", default_value = ":8080")]
    pub listen_addr: String,

    /// Redis host:port (or redis:// URL) to connect to
    #[arg(long, env = "REDIS_ADDR", default_value = ":6379")]
    pub redis_addr: String,

    /// Timeout for connecting to Redis, e.g. 500ms, 1.5s, 1m30s (bare number = seconds)
    #[arg(
        long,
        env = "REDIS_CONNECT_TIMEOUT",
        default_value = "60s",
        value_parser = parse_duration
    )]
    pub redis_connect_timeout: Duration,
}

impl Config {
    /// Address to bind the HTTP listener to. A bare `:port` binds every interface.
    pub fn listen_socket_addr(&self) -> String {
        with_default_host(&self.listen_addr, "0.0.0.0")
    }

    /// Connection URL for the Redis client. A bare `:port` means localhost.
    pub fn redis_url(&self) -> String {
        let addr = self.redis_addr.trim();
        if addr.contains("://") {
            return addr.to_string();
        }
        format!("redis://{}", with_default_host(addr, "127.0.0.1"))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_socket_addr());
        tracing::info!("  Redis URL: {}", self.redis_url());
        tracing::info!("  Redis connect timeout: {:?}", self.redis_connect_timeout);
    }
}

fn with_default_host(addr: &str, host: &str) -> String {
    let addr = addr.trim();
    if addr.starts_with(':') {
        format!("{}{}", host, addr)
    } else {
        addr.to_string()
    }
}

/// Parse Go-style durations such as `250ms`, `1.5s`, `1m30s` or `2h`.
/// A bare integer is seconds.
fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let invalid = || format!("invalid duration '{}': expected e.g. 30s, 1.5s or 1m30s", raw);
    let out_of_range = || format!("duration '{}' is out of range", raw);

    if raw.is_empty() {
        return Err(invalid());
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        let secs: u64 = raw.parse().map_err(|_| out_of_range())?;
        return Ok(Duration::from_secs(secs));
    }

    let is_number = |c: char| c.is_ascii_digit() || c == '.';
    let mut total_nanos: u128 = 0;
    let mut rest = raw;

    while !rest.is_empty() {
        let number_end = rest.find(|c: char| !is_number(c)).ok_or_else(invalid)?;
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail.find(is_number).unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        let unit_nanos: u128 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" => NANOS_PER_SEC,
            "m" => 60 * NANOS_PER_SEC,
            "h" => 3_600 * NANOS_PER_SEC,
            other => return Err(format!("invalid duration unit '{}' in '{}'", other, raw)),
        };

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.contains('.') {
            return Err(invalid());
        }

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        // Digits past nanosecond precision do not change the result
        let fraction = &fraction[..fraction.len().min(18)];
        let fraction_nanos = if fraction.is_empty() {
            0
        } else {
            let digits: u128 = fraction.parse().map_err(|_| invalid())?;
            digits * unit_nanos / 10u128.pow(fraction.len() as u32)
        };

        total_nanos = whole
            .checked_mul(unit_nanos)
            .and_then(|n| n.checked_add(fraction_nanos))
            .and_then(|n| n.checked_add(total_nanos))
            .ok_or_else(out_of_range)?;
        rest = tail;
    }

    let secs = u64::try_from(total_nanos / NANOS_PER_SEC).map_err(|_| out_of_range())?;
    Ok(Duration::new(secs, (total_nanos % NANOS_PER_SEC) as u32))
}

const NANOS_PER_SEC: u128 = 1_000_000_000;
