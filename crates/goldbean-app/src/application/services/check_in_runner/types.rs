use goldbean_domain::check_in::SignInOutcome;
use goldbean_domain::SendKey;

use crate::application::services::notification_service::DispatchOutcome;

/// One send key's accounts and what became of them
#[derive(Debug, Clone)]
pub struct GroupReport {
    pub send_key: SendKey,
    /// In account processing order
    pub outcomes: Vec<SignInOutcome>,
    /// Summary lines of the reportable outcomes, in the same order
    pub lines: Vec<String>,
    pub dispatch: DispatchOutcome,
}

/// Result of a whole run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    pub fn total_accounts(&self) -> usize {
        self.groups.iter().map(|g| g.outcomes.len()).sum()
    }

    pub fn reported_accounts(&self) -> usize {
        self.groups.iter().map(|g| g.lines.len()).sum()
    }

    pub fn failed_accounts(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.outcomes.iter())
            .filter(|o| matches!(o, SignInOutcome::Failed { .. }))
            .count()
    }

    pub fn notifications_delivered(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.dispatch.is_delivered())
            .count()
    }
}
