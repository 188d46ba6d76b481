use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Raised when a key has used up its window allowance.
#[derive(Debug, thiserror::Error)]
#[error("rate limit exceeded: {max_requests} requests per {window_seconds}s")]
pub struct RateLimitExceeded {
    pub max_requests: usize,
    pub window_seconds: u64,
}

/// Sliding-window rate limiter shared by the MCP tools. Counts live in
/// memory per key and do not survive a restart.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_seconds: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_seconds),
            requests: Mutex::new(HashMap::new()),
        }
    }

    pub async fn check_rate_limit(&self, key: &str) -> Result<(), RateLimitExceeded> {
        let now = Instant::now();
        let mut requests = self.requests.lock().await;
        let entries = requests.entry(key.to_string()).or_default();

        // Drop timestamps that have aged out of the window
        while entries
            .front()
            .is_some_and(|t| now.duration_since(*t) >= self.window)
        {
            entries.pop_front();
        }

        if entries.len() >= self.max_requests {
            return Err(RateLimitExceeded {
                max_requests: self.max_requests,
                window_seconds: self.window.as_secs(),
            });
        }

        entries.push_back(now);
        Ok(())
    }
}
