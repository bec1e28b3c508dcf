use goldbean_domain::DomainError;
use url::Url;

pub const USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Html5Plus/1.0 (Immersed/20) JlcMobileApp";

pub const DEFAULT_BASE_URL: &str = "https://m.jlc.com";

pub(super) const ACCESS_TOKEN_HEADER: &str = "x-jlc-accesstoken";

const ASSETS_PATH: &str = "/api/appPlatform/center/assets/selectPersonalAssetsInfo";
const SIGN_IN_PATH: &str = "/api/activity/sign/signIn?source=3";
const VOUCHER_PATH: &str = "/api/activity/sign/receiveVoucher";

/// Resolved platform endpoint URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub assets: Url,
    pub sign_in: Url,
    pub voucher: Url,
}

impl Endpoints {
    /// Resolve the endpoint paths against `base_url`, e.g. `https://m.jlc.com`
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        let base = Url::parse(base_url).map_err(|e| {
            DomainError::InvalidInput(format!("Invalid platform base URL '{}': {}", base_url, e))
        })?;

        let join = |path: &str| {
            base.join(path).map_err(|e| {
                DomainError::InvalidInput(format!("Invalid endpoint path '{}': {}", path, e))
            })
        };

        Ok(Self {
            assets: join(ASSETS_PATH)?,
            sign_in: join(SIGN_IN_PATH)?,
            voucher: join(VOUCHER_PATH)?,
        })
    }
}

/// Clip a response body for logs and error messages
pub(super) fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Parse a body as JSON, mapping failures to a parse error
pub(super) fn parse_json(operation: &str, text: &str) -> Result<serde_json::Value, DomainError> {
    serde_json::from_str(text).map_err(|e| {
        DomainError::Parse(format!(
            "Failed to parse {} response: {} ({})",
            operation,
            e,
            truncate(text, 200)
        ))
    })
}
