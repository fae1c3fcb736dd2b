use std::time::Duration;

/// Backoff policy for idempotent requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 3, base_delay_ms: 500, max_delay_ms: 30_000 }
    }
}

impl RetryConfig {
    pub fn disabled() -> Self {
        Self { max_retries: 0, ..Self::default() }
    }

    /// Delay before retry number `attempt` (1-based), doubling up to the cap.
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let shift = attempt.saturating_sub(1).min(20) as u32;
        let delay = self.base_delay_ms.saturating_mul(1u64 << shift).min(self.max_delay_ms);
        Duration::from_millis(delay)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Gateway base URL without a trailing slash, e.g. `https://agora.example/api`.
    pub gateway_url: String,
    /// Assistant chat endpoint; `None` disables the assistant.
    pub assistant_url: Option<String>,
    pub timeout_secs: u64,
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:8000".to_string(),
            assistant_url: None,
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self { gateway_url: gateway_url.into(), ..Self::default() }
    }

    pub fn with_assistant_url(mut self, url: impl Into<String>) -> Self {
        self.assistant_url = Some(url.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Absolute URL for a gateway path such as `/agents`.
    pub fn url(&self, path: &str) -> String {
        let base = self.gateway_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_doubles_and_caps() {
        let retry = RetryConfig { max_retries: 5, base_delay_ms: 500, max_delay_ms: 1_500 };
        assert_eq!(retry.delay_for(1), Duration::from_millis(500));
        assert_eq!(retry.delay_for(2), Duration::from_millis(1_000));
        assert_eq!(retry.delay_for(3), Duration::from_millis(1_500));
        assert_eq!(retry.delay_for(30), Duration::from_millis(1_500));
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::new("https://agora.example/api/");
        assert_eq!(config.url("/agents"), "https://agora.example/api/agents");
        assert_eq!(config.url("contents/"), "https://agora.example/api/contents/");
    }
}
