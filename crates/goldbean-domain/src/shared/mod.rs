use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse failure category attached to a failed account run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection failures, timeouts, non-2xx statuses
    Transport,
    /// Body was not JSON or lacked an expected field
    Parse,
    /// Anything else
    Unexpected,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Parse => "parse",
            FailureKind::Unexpected => "unexpected",
        }
    }

    /// Human-readable label used in console lines
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Transport => "网络请求失败",
            FailureKind::Parse => "数据解析失败",
            FailureKind::Unexpected => "未知错误",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Map the error onto the failure category reported for an account
    pub fn kind(&self) -> FailureKind {
        match self {
            DomainError::Transport(_) | DomainError::UnexpectedStatus { .. } => {
                FailureKind::Transport
            }
            DomainError::Parse(_) | DomainError::MissingField(_) => FailureKind::Parse,
            DomainError::InvalidInput(_) => FailureKind::Unexpected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            DomainError::Transport("timeout".into()).kind(),
            FailureKind::Transport
        );
        assert_eq!(
            DomainError::UnexpectedStatus {
                status: 502,
                body: String::new()
            }
            .kind(),
            FailureKind::Transport
        );
        assert_eq!(
            DomainError::MissingField("data.customerCode".into()).kind(),
            FailureKind::Parse
        );
        assert_eq!(
            DomainError::Parse("expected value".into()).kind(),
            FailureKind::Parse
        );
        assert_eq!(
            DomainError::InvalidInput("bad header".into()).kind(),
            FailureKind::Unexpected
        );
    }
}
