mod message_builder;
mod sender;

use anyhow::{Context, Result};
use reqwest::Client;

use goldbean_domain::SendKey;

use crate::config::TimeoutConfig;

pub const DEFAULT_SERVERCHAN_BASE_URL: &str = "https://sctapi.ftqq.com";

/// ServerChan (Server酱) webhook notification sender
pub struct ServerChanSender {
    base_url: String,
    client: Client,
}

impl ServerChanSender {
    pub fn new(base_url: &str, timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.http_connect)
            .build()
            .context("Failed to create notification HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_webhook_url(&self, key: &SendKey) -> String {
        format!("{}/{}.send", self.base_url, key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_webhook_url() {
        let sender =
            ServerChanSender::new(DEFAULT_SERVERCHAN_BASE_URL, &TimeoutConfig::default()).unwrap();
        let url = sender.build_webhook_url(&SendKey::new("SCT123abc"));
        assert_eq!(url, "https://sctapi.ftqq.com/SCT123abc.send");
    }

    #[test]
    fn test_build_webhook_url_trims_trailing_slash() {
        let sender =
            ServerChanSender::new("http://127.0.0.1:9000/", &TimeoutConfig::default()).unwrap();
        let url = sender.build_webhook_url(&SendKey::new("key"));
        assert_eq!(url, "http://127.0.0.1:9000/key.send");
    }
}
