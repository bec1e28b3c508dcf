use serde_json::Value;

const CUSTOMER_CODE_FIELD: &str = "customerCode";

/// Hide the middle of an account identifier for console output.
///
/// `12345678` becomes `12****78`; anything shorter than four characters
/// becomes `****`.
pub fn mask_account(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    if chars.len() >= 4 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}

/// `1234568A` becomes `1xxxxx8A`
pub fn mask_customer_code(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let head: String = chars.iter().take(1).collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    format!("{}xxxxx{}", head, tail)
}

/// Recursively mask every string `customerCode` field, returning a new value
pub fn mask_customer_codes(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| {
                    let masked = match v {
                        Value::String(code) if key == CUSTOMER_CODE_FIELD => {
                            Value::String(mask_customer_code(code))
                        }
                        other => mask_customer_codes(other),
                    };
                    (key.clone(), masked)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(mask_customer_codes).collect()),
        other => other.clone(),
    }
}
