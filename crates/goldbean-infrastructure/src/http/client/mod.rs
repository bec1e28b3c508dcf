mod assets;
mod sign_in;
mod types;
mod voucher;

pub use types::{Endpoints, DEFAULT_BASE_URL, USER_AGENT};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client, StatusCode};
use url::Url;

use goldbean_domain::check_in::{AssetsInfo, SignInApi, SignInResponse, VoucherResponse};
use goldbean_domain::{AccessToken, DomainError};

use crate::config::TimeoutConfig;
use types::{truncate, ACCESS_TOKEN_HEADER};

/// HTTP client for the JLC mobile platform
pub struct JlcClient {
    client: Client,
    endpoints: Endpoints,
}

impl JlcClient {
    pub fn new(base_url: &str, timeouts: &TimeoutConfig) -> Result<Self> {
        let endpoints = Endpoints::new(base_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .connect_timeout(timeouts.http_connect)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoints })
    }

    /// Token header shared by all three platform calls; the user agent is
    /// set on the client
    fn build_headers(token: &AccessToken) -> Result<header::HeaderMap, DomainError> {
        let value = header::HeaderValue::from_str(token.as_str()).map_err(|e| {
            DomainError::InvalidInput(format!("Access token is not a valid header value: {}", e))
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(header::HeaderName::from_static(ACCESS_TOKEN_HEADER), value);
        Ok(headers)
    }

    /// Keep the body of a 2xx reply, turn anything else into an error
    fn check_status(status: StatusCode, body: String) -> Result<String, DomainError> {
        if status.is_success() {
            Ok(body)
        } else {
            Err(DomainError::UnexpectedStatus {
                status: status.as_u16(),
                body: truncate(&body, 500),
            })
        }
    }

    /// GET `url` with the account headers and return the body of a 2xx reply
    async fn get_text(
        &self,
        operation: &str,
        url: &Url,
        token: &AccessToken,
    ) -> Result<String, DomainError> {
        let headers = Self::build_headers(token)?;

        let response = self
            .client
            .get(url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                DomainError::Transport(format!("Failed to send {} request: {}", operation, e))
            })?;

        let status = response.status();
        debug!("{} response status: {}", operation, status);

        let body = match response.text().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => "Unable to read response".to_string(),
            Err(e) => {
                return Err(DomainError::Transport(format!(
                    "Failed to read {} response: {}",
                    operation, e
                )))
            }
        };

        Self::check_status(status, body)
    }
}

#[async_trait]
impl SignInApi for JlcClient {
    async fn fetch_assets(&self, token: &AccessToken) -> Result<AssetsInfo, DomainError> {
        let text = self
            .get_text("assets", &self.endpoints.assets, token)
            .await?;
        assets::parse_assets(&text)
    }

    async fn sign_in(&self, token: &AccessToken) -> Result<SignInResponse, DomainError> {
        let text = self
            .get_text("sign-in", &self.endpoints.sign_in, token)
            .await?;
        sign_in::parse_sign_in(&text)
    }

    async fn receive_voucher(&self, token: &AccessToken) -> Result<VoucherResponse, DomainError> {
        let text = self
            .get_text("voucher", &self.endpoints.voucher, token)
            .await?;
        voucher::parse_voucher(&text)
    }
}
