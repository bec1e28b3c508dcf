use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use goldbean_domain::account::mask_account;
use goldbean_domain::check_in::{
    CheckInDomainService, SignInApi, SignInOutcome, SignInResolution,
};
use goldbean_domain::{AccessToken, DomainError};

/// Runs the sign-in sequence for one account
pub struct CheckInExecutor {
    api: Arc<dyn SignInApi>,
}

impl CheckInExecutor {
    pub fn new(api: Arc<dyn SignInApi>) -> Self {
        Self { api }
    }

    /// Assets, sign-in, then the voucher claim when the seventh-day rule
    /// applies. Never fails: errors become `SignInOutcome::Failed`.
    #[instrument(skip_all, fields(account = %token))]
    pub async fn execute(&self, token: &AccessToken) -> SignInOutcome {
        let outcome = self.run_sequence(token).await;

        match &outcome {
            SignInOutcome::Gained { .. }
            | SignInOutcome::SeventhDayBonus { .. }
            | SignInOutcome::AlreadySigned { .. }
            | SignInOutcome::NotEligible { .. }
            | SignInOutcome::VoucherUnclaimed { .. } => info!("{}", outcome.status_line()),
            SignInOutcome::Rejected { .. } => warn!("{}", outcome.status_line()),
            SignInOutcome::Failed { .. } => error!("{}", outcome.status_line()),
        }

        outcome
    }

    async fn run_sequence(&self, token: &AccessToken) -> SignInOutcome {
        // Until the asset query answers, the token is the only identifier
        let assets = match self.api.fetch_assets(token).await {
            Ok(assets) => assets,
            Err(e) => return failed(token.masked(), e),
        };

        let response = match self.api.sign_in(token).await {
            Ok(response) => response,
            Err(e) => return failed(mask_account(&assets.customer_code), e),
        };

        match CheckInDomainService::resolve_sign_in(&assets, &response) {
            SignInResolution::Done(outcome) => outcome,
            SignInResolution::ClaimSeventhDay => {
                info!(
                    "🎁 [账号{}] 获取金豆为0，尝试领取第七天奖励",
                    mask_account(&assets.customer_code)
                );
                match self.api.receive_voucher(token).await {
                    Ok(voucher) => CheckInDomainService::resolve_voucher(&assets, &voucher),
                    Err(e) => failed(mask_account(&assets.customer_code), e),
                }
            }
        }
    }
}

fn failed(masked_account: String, error: DomainError) -> SignInOutcome {
    SignInOutcome::Failed {
        masked_account,
        kind: error.kind(),
        detail: error.to_string(),
    }
}
