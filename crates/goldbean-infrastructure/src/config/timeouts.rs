use std::time::Duration;

/// Timeouts applied to every outbound HTTP call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Whole-request timeout (default: 30 seconds)
    pub http_request: Duration,

    /// TCP/TLS connect timeout (default: 10 seconds)
    pub http_connect: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            http_connect: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the request timeout
    pub fn with_http_request(mut self, duration: Duration) -> Self {
        self.http_request = duration;
        // A connect timeout longer than the request timeout never fires
        self.http_connect = self.http_connect.min(duration);
        self
    }
}
