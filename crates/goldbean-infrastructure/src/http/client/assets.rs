use goldbean_domain::check_in::{integral_from_f64, AssetsInfo};
use goldbean_domain::DomainError;

use super::types::parse_json;

/// Extract `data.customerCode` and `data.integralVoucher` from the asset query
pub(super) fn parse_assets(text: &str) -> Result<AssetsInfo, DomainError> {
    let body = parse_json("assets", text)?;

    if body["data"].is_null() {
        return Err(DomainError::MissingField("data".to_string()));
    }

    let customer_code = body["data"]["customerCode"]
        .as_str()
        .ok_or_else(|| DomainError::MissingField("data.customerCode".to_string()))?
        .to_string();

    // The total is integral but some responses encode it as a float
    let total = &body["data"]["integralVoucher"];
    let integral_voucher = match total.as_i64() {
        Some(value) => value,
        None => {
            let value = total
                .as_f64()
                .ok_or_else(|| DomainError::MissingField("data.integralVoucher".to_string()))?;
            integral_from_f64(value).ok_or_else(|| {
                DomainError::Parse(format!("data.integralVoucher is not an integer: {}", total))
            })?
        }
    };

    log::debug!(
        "Assets fetched for account {}: {} gold beans",
        goldbean_domain::account::mask_account(&customer_code),
        integral_voucher
    );

    Ok(AssetsInfo {
        customer_code,
        integral_voucher,
    })
}
