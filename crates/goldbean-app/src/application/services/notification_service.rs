use std::sync::Arc;
use tracing::{error, info};

use goldbean_domain::notification::{NotificationMessage, NotificationSender};
use goldbean_domain::SendKey;

/// Title of every summary notification
pub const SUMMARY_TITLE: &str = "嘉立创签到汇总";

const UNKNOWN_ERROR: &str = "未知错误";

/// What happened to one group's notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Nothing to report; no request was made
    Skipped,
    Delivered { push_id: Option<String> },
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered { .. })
    }
}

/// Notification application service
/// Sends one summary per send key, never retrying
pub struct NotificationService {
    sender: Arc<dyn NotificationSender>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    /// Body of a summary: entries separated by a blank line
    pub fn build_message(lines: &[String]) -> NotificationMessage {
        NotificationMessage::new(SUMMARY_TITLE, lines.join("\n\n"))
    }

    pub async fn dispatch(&self, key: &SendKey, lines: &[String]) -> DispatchOutcome {
        if lines.is_empty() {
            info!("⏭️ SendKey: {} 组内无金豆获取，跳过通知", key);
            return DispatchOutcome::Skipped;
        }

        info!("📤 检测到有金豆获取，准备发送通知给 SendKey: {}", key);

        let message = Self::build_message(lines);
        match self.sender.send(key, &message).await {
            Ok(receipt) if receipt.is_accepted() => {
                info!(
                    "✅ 通知发送成功！消息ID: {}",
                    receipt.push_id.as_deref().unwrap_or("")
                );
                DispatchOutcome::Delivered {
                    push_id: receipt.push_id,
                }
            }
            Ok(receipt) => {
                let reason = receipt
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                error!(code = ?receipt.code, "❌ 通知发送失败！错误: {}", reason);
                DispatchOutcome::Failed { reason }
            }
            Err(e) => {
                error!("❌ 通知发送失败！错误: {}", e);
                DispatchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
