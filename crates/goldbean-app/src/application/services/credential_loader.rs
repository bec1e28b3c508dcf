use tracing::warn;

use goldbean_domain::{AccessToken, AccountEntry, SendKey};

use crate::application::config::ConfigError;

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pair tokens with send keys by position.
///
/// Both lists are cut to the shorter length: token `i` reports to key `i`.
/// A miscount drops the tail of the longer list, so the mismatch is logged.
pub fn load_accounts(
    token_list: &str,
    send_key_list: &str,
) -> Result<Vec<AccountEntry>, ConfigError> {
    let tokens = parse_list(token_list);
    let send_keys = parse_list(send_key_list);

    if tokens.is_empty() {
        return Err(ConfigError::MissingTokens);
    }
    if send_keys.is_empty() {
        return Err(ConfigError::MissingSendKeys);
    }

    if tokens.len() != send_keys.len() {
        warn!(
            tokens = tokens.len(),
            send_keys = send_keys.len(),
            "⚠️ TOKEN_LIST 与 SEND_KEY_LIST 数量不一致，按较短的列表截断"
        );
    }

    Ok(tokens
        .into_iter()
        .zip(send_keys)
        .map(|(token, key)| AccountEntry::new(AccessToken::new(token), SendKey::new(key)))
        .collect())
}
