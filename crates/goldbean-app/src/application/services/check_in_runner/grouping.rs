use std::collections::HashMap;

use goldbean_domain::{AccessToken, AccountEntry, SendKey};

/// Accounts reporting to the same send key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationGroup {
    pub send_key: SendKey,
    pub tokens: Vec<AccessToken>,
}

/// Group entries by send key, keeping first-seen key order and the
/// original account order within each key
pub fn group_by_send_key(entries: Vec<AccountEntry>) -> Vec<NotificationGroup> {
    let mut groups: Vec<NotificationGroup> = Vec::new();
    let mut index: HashMap<SendKey, usize> = HashMap::new();

    for entry in entries {
        match index.get(&entry.send_key) {
            Some(&i) => groups[i].tokens.push(entry.token),
            None => {
                index.insert(entry.send_key.clone(), groups.len());
                groups.push(NotificationGroup {
                    send_key: entry.send_key,
                    tokens: vec![entry.token],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, key: &str) -> AccountEntry {
        AccountEntry::new(AccessToken::new(token), SendKey::new(key))
    }

    #[test]
    fn test_first_seen_key_order_and_stable_accounts() {
        let groups = group_by_send_key(vec![
            entry("t1", "kB"),
            entry("t2", "kA"),
            entry("t3", "kB"),
            entry("t4", "kC"),
            entry("t5", "kA"),
        ]);

        let keys: Vec<&str> = groups.iter().map(|g| g.send_key.as_str()).collect();
        assert_eq!(keys, vec!["kB", "kA", "kC"]);

        let tokens = |i: usize| -> Vec<&str> {
            groups[i].tokens.iter().map(|t| t.as_str()).collect()
        };
        assert_eq!(tokens(0), vec!["t1", "t3"]);
        assert_eq!(tokens(1), vec!["t2", "t5"]);
        assert_eq!(tokens(2), vec!["t4"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_send_key(Vec::new()).is_empty());
    }
}
