mod grouping;
mod types;

pub use grouping::{group_by_send_key, NotificationGroup};
pub use types::{GroupReport, RunReport};

use std::sync::Arc;
use tracing::{info, instrument};

use goldbean_domain::check_in::SignInOutcome;
use goldbean_domain::AccountEntry;

use super::check_in_executor::CheckInExecutor;
use super::notification_service::NotificationService;
use super::throttle::Throttle;

/// Drives a whole run: every group's accounts in order, then one
/// notification per group
pub struct CheckInRunner {
    executor: CheckInExecutor,
    notifier: NotificationService,
    throttle: Arc<dyn Throttle>,
}

impl CheckInRunner {
    pub fn new(
        executor: CheckInExecutor,
        notifier: NotificationService,
        throttle: Arc<dyn Throttle>,
    ) -> Self {
        Self {
            executor,
            notifier,
            throttle,
        }
    }

    #[instrument(skip_all, fields(accounts = entries.len()))]
    pub async fn run(&self, entries: Vec<AccountEntry>) -> RunReport {
        info!("🔧 共发现 {} 个账号需要签到", entries.len());

        let groups = group_by_send_key(entries);
        info!("📊 共分为 {} 个通知组", groups.len());

        let mut processed = Vec::with_capacity(groups.len());
        for group in groups {
            let outcomes = self.run_group(&group).await;
            processed.push((group, outcomes));
        }

        info!("📬 开始检查是否需要发送通知...");
        let mut report = RunReport::default();
        for (group, outcomes) in processed {
            let lines: Vec<String> = outcomes.iter().filter_map(|o| o.summary_line()).collect();
            let dispatch = self.notifier.dispatch(&group.send_key, &lines).await;

            report.groups.push(GroupReport {
                send_key: group.send_key,
                outcomes,
                lines,
                dispatch,
            });
        }

        if report.notifications_delivered() == 0 {
            info!("ℹ️ 所有账号均未获取到金豆，无通知发送");
        }
        info!(
            total = report.total_accounts(),
            reported = report.reported_accounts(),
            failed = report.failed_accounts(),
            delivered = report.notifications_delivered(),
            "签到汇总"
        );

        report
    }

    async fn run_group(&self, group: &NotificationGroup) -> Vec<SignInOutcome> {
        let count = group.tokens.len();
        info!(
            "🚀 开始处理 SendKey: {} 的 {} 个账号",
            group.send_key, count
        );

        let mut outcomes = Vec::with_capacity(count);
        for (i, token) in group.tokens.iter().enumerate() {
            info!("📝 处理第 {}/{} 个账号...", i + 1, count);
            outcomes.push(self.executor.execute(token).await);

            if i + 1 < count {
                let delay = self.throttle.next_delay();
                if !delay.is_zero() {
                    info!("⏳ 等待 {} 秒后处理下一个账号...", delay.as_secs());
                    tokio::time::sleep(delay).await;
                }
            }
        }

        outcomes
    }
}
