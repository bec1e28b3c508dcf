mod check_in_executor;
mod check_in_runner;
mod credential_loader;
mod notification_service;
mod throttle;

pub use check_in_executor::CheckInExecutor;
pub use check_in_runner::{
    group_by_send_key, CheckInRunner, GroupReport, NotificationGroup, RunReport,
};
pub use credential_loader::{load_accounts, parse_list};
pub use notification_service::{DispatchOutcome, NotificationService, SUMMARY_TITLE};
pub use throttle::{NoDelay, RandomDelay, Throttle};
