use async_trait::async_trait;

use goldbean_domain::notification::{NotificationMessage, NotificationSender, PushReceipt};
use goldbean_domain::{DomainError, SendKey};

#[async_trait]
impl NotificationSender for super::ServerChanSender {
    async fn send(
        &self,
        key: &SendKey,
        message: &NotificationMessage,
    ) -> Result<PushReceipt, DomainError> {
        let url = self.build_webhook_url(key);

        let response = self
            .client
            .post(&url)
            .form(&Self::build_form(message))
            .send()
            .await
            .map_err(|e| {
                DomainError::Transport(format!("Failed to send ServerChan notification: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::Transport(format!("Failed to read ServerChan response: {}", e))
        })?;

        log::debug!("ServerChan response status {} for key {}", status, key);

        Self::receipt_from_reply(status, &body)
    }
}
