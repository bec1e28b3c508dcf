use goldbean_domain::notification::{NotificationMessage, PushReceipt};
use goldbean_domain::DomainError;
use reqwest::StatusCode;

impl super::ServerChanSender {
    /// Form fields of a ServerChan push: `text` is the title, `desp` the body
    pub(super) fn build_form(message: &NotificationMessage) -> [(&'static str, &str); 2] {
        [
            ("text", message.title.as_str()),
            ("desp", message.content.as_str()),
        ]
    }

    /// Parse `{"code":0,"message":"","data":{"pushid":"..."}}`
    pub(super) fn parse_receipt(text: &str) -> Result<PushReceipt, DomainError> {
        let body: serde_json::Value = serde_json::from_str(text).map_err(|e| {
            DomainError::Parse(format!(
                "Failed to parse ServerChan response: {} ({})",
                e,
                text.chars().take(200).collect::<String>()
            ))
        })?;

        let push_id = match &body["data"]["pushid"] {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        };

        Ok(PushReceipt {
            code: body["code"].as_i64(),
            message: body["message"].as_str().map(str::to_string),
            push_id,
        })
    }

    /// ServerChan reports most rejections as JSON even on non-2xx statuses,
    /// so the body wins over the status whenever it parses
    pub(super) fn receipt_from_reply(
        status: StatusCode,
        body: &str,
    ) -> Result<PushReceipt, DomainError> {
        match Self::parse_receipt(body) {
            Ok(receipt) => Ok(receipt),
            Err(_) if !status.is_success() => Err(DomainError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ServerChanSender;
    use super::*;

    #[test]
    fn test_build_form() {
        let message = NotificationMessage::new("嘉立创签到汇总", "line one\n\nline two");
        let form = ServerChanSender::build_form(&message);

        assert_eq!(form[0], ("text", "嘉立创签到汇总"));
        assert_eq!(form[1], ("desp", "line one\n\nline two"));
    }

    #[test]
    fn test_parse_accepted_receipt() {
        let receipt = ServerChanSender::parse_receipt(
            r#"{"code":0,"message":"","data":{"pushid":"123456","readkey":"abc","error":"SUCCESS","errno":0}}"#,
        )
        .unwrap();

        assert!(receipt.is_accepted());
        assert_eq!(receipt.push_id.as_deref(), Some("123456"));
    }

    #[test]
    fn test_parse_numeric_push_id() {
        let receipt =
            ServerChanSender::parse_receipt(r#"{"code":0,"data":{"pushid":98765}}"#).unwrap();
        assert_eq!(receipt.push_id.as_deref(), Some("98765"));
    }

    #[test]
    fn test_parse_rejected_receipt() {
        let receipt = ServerChanSender::parse_receipt(
            r#"{"code":40001,"message":"bad pushtoken","data":null}"#,
        )
        .unwrap();

        assert!(!receipt.is_accepted());
        assert_eq!(receipt.message.as_deref(), Some("bad pushtoken"));
        assert!(receipt.push_id.is_none());
    }

    #[test]
    fn test_error_status_with_json_body_keeps_receipt() {
        let receipt = ServerChanSender::receipt_from_reply(
            StatusCode::BAD_REQUEST,
            r#"{"code":40001,"message":"bad pushtoken"}"#,
        )
        .unwrap();

        assert!(!receipt.is_accepted());
        assert_eq!(receipt.code, Some(40001));
        assert_eq!(receipt.message.as_deref(), Some("bad pushtoken"));
    }

    #[test]
    fn test_error_status_without_json_is_unexpected_status() {
        let err =
            ServerChanSender::receipt_from_reply(StatusCode::BAD_GATEWAY, "<html>502</html>")
                .unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedStatus { status: 502, .. }));
    }

    #[test]
    fn test_success_status_without_json_is_parse_error() {
        let err = ServerChanSender::receipt_from_reply(StatusCode::OK, "ok").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_parse_non_json_receipt() {
        let err = ServerChanSender::parse_receipt("Service Unavailable").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
