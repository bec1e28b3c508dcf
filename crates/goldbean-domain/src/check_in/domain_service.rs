use super::outcome::SignInOutcome;
use super::value_objects::{AssetsInfo, SignInResponse, VoucherResponse};
use crate::account::mask_account;
use crate::shared::FailureKind;

/// Fixed reward credited when the seventh-day voucher is claimed
pub const SEVENTH_DAY_BONUS: i64 = 8;

/// Message fragment the platform returns when today's sign-in already happened
pub const ALREADY_SIGNED_MARKER: &str = "已经签到";

const UNKNOWN_ERROR: &str = "未知错误";

/// What to do after the sign-in call returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInResolution {
    Done(SignInOutcome),
    /// Positive status without a gain: the voucher endpoint must be called
    ClaimSeventhDay,
}

/// Domain service for sign-in business rules
/// Contains pure domain logic without infrastructure dependencies
pub struct CheckInDomainService;

impl CheckInDomainService {
    /// Decide the outcome of a sign-in response for an account
    pub fn resolve_sign_in(assets: &AssetsInfo, response: &SignInResponse) -> SignInResolution {
        let customer_code = assets.customer_code.clone();

        if !response.success {
            let reason = response
                .message
                .clone()
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

            let outcome = if Self::is_already_signed_message(&reason) {
                SignInOutcome::AlreadySigned { customer_code }
            } else {
                SignInOutcome::Rejected {
                    customer_code,
                    reason,
                }
            };
            return SignInResolution::Done(outcome);
        }

        match response.status() {
            Some(status) if status > 0 => match response.gain_num() {
                Some(gain) if gain != 0 => {
                    let outcome = match assets.integral_voucher.checked_add(gain) {
                        Some(total) => SignInOutcome::Gained {
                            customer_code,
                            gain,
                            total,
                        },
                        None => out_of_range(assets, gain),
                    };
                    SignInResolution::Done(outcome)
                }
                _ => SignInResolution::ClaimSeventhDay,
            },
            status => SignInResolution::Done(SignInOutcome::NotEligible {
                customer_code,
                status,
            }),
        }
    }

    /// Decide the outcome of the seventh-day voucher claim
    pub fn resolve_voucher(assets: &AssetsInfo, response: &VoucherResponse) -> SignInOutcome {
        if response.success {
            match assets.integral_voucher.checked_add(SEVENTH_DAY_BONUS) {
                Some(total) => SignInOutcome::SeventhDayBonus {
                    customer_code: assets.customer_code.clone(),
                    total,
                },
                None => out_of_range(assets, SEVENTH_DAY_BONUS),
            }
        } else {
            SignInOutcome::VoucherUnclaimed {
                customer_code: assets.customer_code.clone(),
                reason: response.message.clone(),
            }
        }
    }

    /// Legacy compatibility: the platform exposes no structured code for a
    /// repeated sign-in, only a localized message. Keep this the single place
    /// that inspects message text.
    pub fn is_already_signed_message(message: &str) -> bool {
        message.contains(ALREADY_SIGNED_MARKER)
    }
}

/// A total that does not fit in i64 can only come from a malformed reply
fn out_of_range(assets: &AssetsInfo, added: i64) -> SignInOutcome {
    SignInOutcome::Failed {
        masked_account: mask_account(&assets.customer_code),
        kind: FailureKind::Parse,
        detail: format!(
            "Gold bean total out of range: {} + {}",
            assets.integral_voucher, added
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_in::SignInData;

    fn assets(total: i64) -> AssetsInfo {
        AssetsInfo {
            customer_code: "12345678".to_string(),
            integral_voucher: total,
        }
    }

    fn signed(status: Option<i64>, gain_num: Option<i64>) -> SignInResponse {
        SignInResponse {
            success: true,
            message: None,
            data: Some(SignInData { gain_num, status }),
        }
    }

    #[test]
    fn test_gain_is_added_to_previous_total() {
        let resolution =
            CheckInDomainService::resolve_sign_in(&assets(100), &signed(Some(1), Some(5)));

        assert_eq!(
            resolution,
            SignInResolution::Done(SignInOutcome::Gained {
                customer_code: "12345678".into(),
                gain: 5,
                total: 105,
            })
        );
    }

    #[test]
    fn test_zero_gain_requires_voucher_claim() {
        let resolution =
            CheckInDomainService::resolve_sign_in(&assets(100), &signed(Some(1), Some(0)));
        assert_eq!(resolution, SignInResolution::ClaimSeventhDay);
    }

    #[test]
    fn test_missing_gain_requires_voucher_claim() {
        let resolution =
            CheckInDomainService::resolve_sign_in(&assets(100), &signed(Some(2), None));
        assert_eq!(resolution, SignInResolution::ClaimSeventhDay);
    }

    #[test]
    fn test_non_positive_status_is_not_eligible() {
        for status in [Some(0), Some(-1), None] {
            let resolution =
                CheckInDomainService::resolve_sign_in(&assets(100), &signed(status, Some(5)));
            assert_eq!(
                resolution,
                SignInResolution::Done(SignInOutcome::NotEligible {
                    customer_code: "12345678".into(),
                    status,
                })
            );
        }
    }

    #[test]
    fn test_missing_data_is_not_eligible() {
        let response = SignInResponse {
            success: true,
            message: None,
            data: None,
        };
        let resolution = CheckInDomainService::resolve_sign_in(&assets(100), &response);
        assert!(matches!(
            resolution,
            SignInResolution::Done(SignInOutcome::NotEligible { status: None, .. })
        ));
    }

    #[test]
    fn test_already_signed_message() {
        let response = SignInResponse {
            success: false,
            message: Some("您今天已经签到过了".to_string()),
            data: None,
        };
        let resolution = CheckInDomainService::resolve_sign_in(&assets(100), &response);
        assert_eq!(
            resolution,
            SignInResolution::Done(SignInOutcome::AlreadySigned {
                customer_code: "12345678".into()
            })
        );
    }

    #[test]
    fn test_other_failure_is_rejected_with_reason() {
        let response = SignInResponse {
            success: false,
            message: Some("登录已过期".to_string()),
            data: None,
        };
        let resolution = CheckInDomainService::resolve_sign_in(&assets(100), &response);
        assert_eq!(
            resolution,
            SignInResolution::Done(SignInOutcome::Rejected {
                customer_code: "12345678".into(),
                reason: "登录已过期".into(),
            })
        );
    }

    #[test]
    fn test_failure_without_message_uses_unknown_error() {
        let resolution =
            CheckInDomainService::resolve_sign_in(&assets(100), &SignInResponse::default());
        assert!(matches!(
            resolution,
            SignInResolution::Done(SignInOutcome::Rejected { ref reason, .. }) if reason == "未知错误"
        ));
    }

    #[test]
    fn test_voucher_success_adds_fixed_bonus() {
        let response = VoucherResponse {
            success: true,
            message: None,
        };
        assert_eq!(
            CheckInDomainService::resolve_voucher(&assets(100), &response),
            SignInOutcome::SeventhDayBonus {
                customer_code: "12345678".into(),
                total: 108,
            }
        );
    }

    #[test]
    fn test_voucher_refused() {
        let response = VoucherResponse {
            success: false,
            message: Some("已领取".into()),
        };
        assert_eq!(
            CheckInDomainService::resolve_voucher(&assets(100), &response),
            SignInOutcome::VoucherUnclaimed {
                customer_code: "12345678".into(),
                reason: Some("已领取".into()),
            }
        );
    }

    #[test]
    fn test_gain_overflow_becomes_parse_failure() {
        let resolution =
            CheckInDomainService::resolve_sign_in(&assets(i64::MAX), &signed(Some(1), Some(5)));

        match resolution {
            SignInResolution::Done(SignInOutcome::Failed {
                masked_account,
                kind,
                ..
            }) => {
                assert_eq!(masked_account, "12****78");
                assert_eq!(kind, FailureKind::Parse);
            }
            other => panic!("expected a failed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_voucher_bonus_overflow_becomes_parse_failure() {
        let response = VoucherResponse {
            success: true,
            message: None,
        };
        let outcome = CheckInDomainService::resolve_voucher(&assets(i64::MAX - 3), &response);
        assert!(matches!(
            outcome,
            SignInOutcome::Failed {
                kind: FailureKind::Parse,
                ..
            }
        ));
    }
}
