use goldbean_domain::check_in::VoucherResponse;
use goldbean_domain::DomainError;

use super::types::parse_json;

pub(super) fn parse_voucher(text: &str) -> Result<VoucherResponse, DomainError> {
    let body = parse_json("voucher", text)?;

    serde_json::from_value(body)
        .map_err(|e| DomainError::Parse(format!("Unexpected voucher response shape: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_voucher() {
        let claimed = parse_voucher(r#"{"success":true,"message":"领取成功","data":{}}"#).unwrap();
        assert!(claimed.success);

        let refused = parse_voucher(r#"{"success":false,"message":"不满足领取条件"}"#).unwrap();
        assert!(!refused.success);
        assert_eq!(refused.message.as_deref(), Some("不满足领取条件"));
    }
}
