use serde::{Deserialize, Deserializer, Serialize};

/// Identity and running gold-bean total of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsInfo {
    pub customer_code: String,
    pub integral_voucher: i64, // gold beans held before today's sign-in
}

/// Body of the sign-in endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SignInData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInData {
    #[serde(default, deserialize_with = "integral_opt")]
    pub gain_num: Option<i64>,
    #[serde(default, deserialize_with = "integral_opt")]
    pub status: Option<i64>,
}

impl SignInResponse {
    pub fn status(&self) -> Option<i64> {
        self.data.as_ref().and_then(|d| d.status)
    }

    pub fn gain_num(&self) -> Option<i64> {
        self.data.as_ref().and_then(|d| d.gain_num)
    }
}

/// Body of the seventh-day voucher endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoucherResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Whole-number floats such as `5.0` as i64. Fractional, non-finite and
/// out-of-range values yield `None`.
pub fn integral_from_f64(value: f64) -> Option<i64> {
    // i64::MIN and 2^63 are both exact as f64
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
}

/// Integer fields the platform sometimes encodes as floats
fn integral_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawNumber::Int(value)) => Ok(Some(value)),
        Some(RawNumber::Float(value)) => integral_from_f64(value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("expected an integral number, got {}", value))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_from_f64() {
        assert_eq!(integral_from_f64(42.0), Some(42));
        assert_eq!(integral_from_f64(-3.0), Some(-3));
        assert_eq!(integral_from_f64(2.5), None);
        assert_eq!(integral_from_f64(f64::NAN), None);
        assert_eq!(integral_from_f64(f64::INFINITY), None);
        assert_eq!(integral_from_f64(1e19), None);
        assert_eq!(integral_from_f64(i64::MAX as f64), None);
    }

    #[test]
    fn test_sign_in_data_accepts_whole_floats() {
        let data: SignInData = serde_json::from_str(r#"{"gainNum":5.0,"status":1.0}"#).unwrap();
        assert_eq!(data.gain_num, Some(5));
        assert_eq!(data.status, Some(1));
    }

    #[test]
    fn test_sign_in_data_null_and_missing_fields() {
        let data: SignInData = serde_json::from_str(r#"{"gainNum":null}"#).unwrap();
        assert_eq!(data, SignInData::default());
    }

    #[test]
    fn test_sign_in_data_rejects_fractional_gain() {
        assert!(serde_json::from_str::<SignInData>(r#"{"gainNum":1.5,"status":1}"#).is_err());
    }
}
