use goldbean_domain::account::mask_customer_codes;
use goldbean_domain::check_in::SignInResponse;
use goldbean_domain::DomainError;

use super::types::parse_json;

pub(super) fn parse_sign_in(text: &str) -> Result<SignInResponse, DomainError> {
    let body = parse_json("sign-in", text)?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "Sign-in response body: {}",
            serde_json::to_string(&mask_customer_codes(&body)).unwrap_or_default()
        );
    }

    serde_json::from_value(body)
        .map_err(|e| DomainError::Parse(format!("Unexpected sign-in response shape: {}", e)))
}
