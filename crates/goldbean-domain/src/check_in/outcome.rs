use serde::{Deserialize, Serialize};

use crate::account::mask_account;
use crate::shared::FailureKind;

/// Result of one account's sign-in sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SignInOutcome {
    /// Regular day: `gain` beans awarded, `total` is the new running total
    Gained {
        customer_code: String,
        gain: i64,
        total: i64,
    },
    /// Seventh consecutive day: voucher claimed, fixed bonus added
    SeventhDayBonus { customer_code: String, total: i64 },
    AlreadySigned { customer_code: String },
    /// Sign-in refused for a reason other than "already signed"
    Rejected {
        customer_code: String,
        reason: String,
    },
    /// Sign-in succeeded but the status field was absent or not positive
    NotEligible {
        customer_code: String,
        status: Option<i64>,
    },
    /// Seventh-day path taken but the voucher claim was refused
    VoucherUnclaimed {
        customer_code: String,
        reason: Option<String>,
    },
    /// The sequence broke off; `masked_account` is the best identifier known
    Failed {
        masked_account: String,
        kind: FailureKind,
        detail: String,
    },
}

impl SignInOutcome {
    /// Whether the run earned beans and should be reported
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            SignInOutcome::Gained { .. } | SignInOutcome::SeventhDayBonus { .. }
        )
    }

    /// Masked account identifier used in every console line
    pub fn masked_account(&self) -> String {
        match self {
            SignInOutcome::Gained { customer_code, .. }
            | SignInOutcome::SeventhDayBonus { customer_code, .. }
            | SignInOutcome::AlreadySigned { customer_code }
            | SignInOutcome::Rejected { customer_code, .. }
            | SignInOutcome::NotEligible { customer_code, .. }
            | SignInOutcome::VoucherUnclaimed { customer_code, .. } => {
                mask_account(customer_code)
            }
            SignInOutcome::Failed { masked_account, .. } => masked_account.clone(),
        }
    }

    /// Line included in the notification body, only for reportable outcomes
    pub fn summary_line(&self) -> Option<String> {
        match self {
            SignInOutcome::Gained { gain, total, .. } => Some(format!(
                "✅ 账号({})：获取{}个金豆，当前总数：{}",
                self.masked_account(),
                gain,
                total
            )),
            SignInOutcome::SeventhDayBonus { total, .. } => Some(format!(
                "🎉 账号({})：第七天签到成功，当前金豆总数：{}",
                self.masked_account(),
                total
            )),
            _ => None,
        }
    }

    /// One-line console status
    pub fn status_line(&self) -> String {
        let account = self.masked_account();
        match self {
            SignInOutcome::Gained { .. } => format!("✅ [账号{}] 今日签到成功", account),
            SignInOutcome::SeventhDayBonus { .. } => {
                format!("🎉 [账号{}] 第七天签到成功", account)
            }
            SignInOutcome::AlreadySigned { .. } => format!("ℹ️ [账号{}] 今日已签到", account),
            SignInOutcome::Rejected { reason, .. } => {
                format!("❌ [账号{}] 签到失败 - {}", account, reason)
            }
            SignInOutcome::NotEligible { .. } => {
                format!("ℹ️ [账号{}] 今日已签到或签到失败", account)
            }
            SignInOutcome::VoucherUnclaimed { .. } => {
                format!("ℹ️ [账号{}] 第七天签到失败，无金豆获取", account)
            }
            SignInOutcome::Failed { kind, detail, .. } => {
                format!("❌ [账号{}] {}: {}", account, kind.label(), detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gained_summary_line() {
        let outcome = SignInOutcome::Gained {
            customer_code: "12345678".into(),
            gain: 5,
            total: 105,
        };

        assert!(outcome.is_reportable());
        assert_eq!(
            outcome.summary_line().as_deref(),
            Some("✅ 账号(12****78)：获取5个金豆，当前总数：105")
        );
    }

    #[test]
    fn test_seventh_day_summary_line() {
        let outcome = SignInOutcome::SeventhDayBonus {
            customer_code: "12345678".into(),
            total: 108,
        };

        assert_eq!(
            outcome.summary_line().as_deref(),
            Some("🎉 账号(12****78)：第七天签到成功，当前金豆总数：108")
        );
    }

    #[test]
    fn test_non_reportable_outcomes_have_no_line() {
        let outcomes = vec![
            SignInOutcome::AlreadySigned {
                customer_code: "12345678".into(),
            },
            SignInOutcome::Rejected {
                customer_code: "12345678".into(),
                reason: "token expired".into(),
            },
            SignInOutcome::NotEligible {
                customer_code: "12345678".into(),
                status: Some(0),
            },
            SignInOutcome::VoucherUnclaimed {
                customer_code: "12345678".into(),
                reason: None,
            },
            SignInOutcome::Failed {
                masked_account: "ab****yz".into(),
                kind: FailureKind::Transport,
                detail: "connection refused".into(),
            },
        ];

        for outcome in outcomes {
            assert!(!outcome.is_reportable());
            assert!(outcome.summary_line().is_none(), "{:?}", outcome);
        }
    }

    #[test]
    fn test_failed_status_line_uses_masked_token() {
        let outcome = SignInOutcome::Failed {
            masked_account: "ab****yz".into(),
            kind: FailureKind::Parse,
            detail: "Missing field: data.customerCode".into(),
        };

        assert_eq!(
            outcome.status_line(),
            "❌ [账号ab****yz] 数据解析失败: Missing field: data.customerCode"
        );
    }
}
