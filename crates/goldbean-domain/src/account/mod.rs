mod masking;

pub use masking::{mask_account, mask_customer_code, mask_customer_codes};

use std::fmt;

/// Platform access token, sent verbatim as `X-JLC-AccessToken`.
///
/// Formatting never prints the full token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn masked(&self) -> String {
        mask_account(&self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.masked()).finish()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// ServerChan send key. Accounts sharing a key share one notification.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SendKey(String);

impl SendKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First five characters followed by `...`
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(5).collect();
        format!("{}...", head)
    }
}

impl fmt::Debug for SendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SendKey").field(&self.short()).finish()
    }
}

impl fmt::Display for SendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}

/// One account paired with the key its results are reported to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    pub token: AccessToken,
    pub send_key: SendKey,
}

impl AccountEntry {
    pub fn new(token: AccessToken, send_key: SendKey) -> Self {
        Self { token, send_key }
    }
}
