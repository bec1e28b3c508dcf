use async_trait::async_trait;

use super::value_objects::{AssetsInfo, SignInResponse, VoucherResponse};
use crate::account::AccessToken;
use crate::shared::DomainError;

/// The three platform calls of a daily sign-in.
///
/// Implementations report transport and decoding problems as errors; a
/// response the platform marks `success: false` is still `Ok`.
#[async_trait]
pub trait SignInApi: Send + Sync {
    /// Query the account identifier and current gold-bean total
    async fn fetch_assets(&self, token: &AccessToken) -> Result<AssetsInfo, DomainError>;

    /// Perform today's sign-in
    async fn sign_in(&self, token: &AccessToken) -> Result<SignInResponse, DomainError>;

    /// Claim the seventh-consecutive-day voucher
    async fn receive_voucher(&self, token: &AccessToken) -> Result<VoucherResponse, DomainError>;
}
