use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::account::SendKey;
use crate::shared::DomainError;

/// Notification message to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Message title
    pub title: String,
    /// Message content/body
    pub content: String,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// What the push service answered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushReceipt {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub push_id: Option<String>,
}

impl PushReceipt {
    /// The push service uses `code == 0` for an accepted message
    pub fn is_accepted(&self) -> bool {
        self.code == Some(0)
    }
}

/// Notification sender trait (Strategy pattern)
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a message to the destination routed by `key`.
    ///
    /// A transport failure is an error; a rejection by the service is an
    /// `Ok` receipt that is not accepted.
    async fn send(
        &self,
        key: &SendKey,
        message: &NotificationMessage,
    ) -> Result<PushReceipt, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_accepted_only_on_zero() {
        let accepted = PushReceipt {
            code: Some(0),
            ..Default::default()
        };
        let rejected = PushReceipt {
            code: Some(40001),
            message: Some("bad pushkey".into()),
            push_id: None,
        };

        assert!(accepted.is_accepted());
        assert!(!rejected.is_accepted());
        assert!(!PushReceipt::default().is_accepted());
    }
}
