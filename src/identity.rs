// 🔑 Identity Fingerprint - Composite account identity across report exports
// Recognizes that two bureau-sourced records describe the same real-world
// account: last-4 account digits + normalized open-date key, with a
// creditor-name fallback when no usable digits exist.

use crate::report::{MergedAccount, NOT_PROVIDED};

/// Date key for empty / "Not Provided" open dates
const UNKNOWN_DATE: &str = "unknown";

/// Derive the composite identity key for one account.
///
/// Pure and deterministic: the key is recomputed from the record's fields on
/// every reconciliation run and is never stored back on the source record.
///
/// - `acct_<last4>_<MM_YYYY>` when the account number yields at least 4 digits
/// - `name_<creditor prefix>_<MM_YYYY>` otherwise
///
/// The date key deliberately collapses "11/21/2025" and "11/2025" to
/// "11_2025" so the same account encoded differently by two report exports
/// still merges.
pub fn identity_key(account: &MergedAccount) -> String {
    let last4 = account_last4(&account.account_number);
    let date_key = date_key(&account.date_opened);

    match last4 {
        Some(last4) => format!("acct_{}_{}", last4, date_key),
        None => format!("name_{}_{}", creditor_prefix(&account.creditor_name), date_key),
    }
}

/// Last 4 digits of the account number, or None when fewer than 4 digits
/// survive after stripping mask characters.
fn account_last4(account_number: &str) -> Option<String> {
    let digits: String = account_number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        Some(digits[digits.len() - 4..].to_string())
    } else {
        None
    }
}

/// Normalize a free-text open date to an `MM_YYYY` key.
///
/// Tolerant of MM/DD/YYYY and MM/YYYY: the first 1-2 digit group is the
/// month, the last 4-digit group is the year. Unparsable text falls back to
/// the raw string, so two records with genuinely different unparsable dates
/// stay unmerged.
fn date_key(date_opened: &str) -> String {
    let raw = date_opened.trim();
    if raw.is_empty() || raw == NOT_PROVIDED {
        return UNKNOWN_DATE.to_string();
    }

    let groups = digit_groups(raw);
    let month = groups.iter().find(|g| g.len() <= 2);
    let year = groups.iter().rev().find(|g| g.len() == 4);

    match (month, year) {
        (Some(month), Some(year)) => {
            let month: u32 = month.parse().unwrap_or(0);
            format!("{:02}_{}", month, year)
        }
        _ => raw.to_string(),
    }
}

/// Consecutive digit runs in order of appearance
fn digit_groups(text: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

/// First creditor-name token, lowercased, alphabetic characters only.
/// "Chase Bank" and "chase" both normalize to "chase".
fn creditor_prefix(creditor_name: &str) -> String {
    creditor_name
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn account(number: &str, opened: &str, creditor: &str) -> MergedAccount {
        MergedAccount {
            row_id: "test".to_string(),
            creditor_name: creditor.to_string(),
            account_number: number.to_string(),
            date_opened: opened.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_and_partial_dates_merge() {
        let a = account("****1234", "11/21/2025", "Capital One");
        let b = account("XXXX-1234", "11/2025", "Capital One");
        assert_eq!(identity_key(&a), identity_key(&b));
        assert_eq!(identity_key(&a), "acct_1234_11_2025");
    }

    #[test]
    fn test_month_is_zero_padded() {
        let a = account("1234", "3/2020", "Capital One");
        assert_eq!(identity_key(&a), "acct_1234_03_2020");
    }

    #[test]
    fn test_name_fallback_same_prefix_merges() {
        let a = account("", "03/2020", "Chase Bank");
        let b = account("****", "03/2020", "chase");
        assert_eq!(identity_key(&a), identity_key(&b));
        assert_eq!(identity_key(&a), "name_chase_03_2020");
    }

    #[test]
    fn test_fewer_than_four_digits_uses_name() {
        let a = account("123", "03/2020", "Chase Bank");
        assert_eq!(identity_key(&a), "name_chase_03_2020");
    }

    #[test]
    fn test_not_provided_date_is_unknown() {
        let a = account("****5678", "Not Provided", "Chase");
        assert_eq!(identity_key(&a), "acct_5678_unknown");

        let b = account("****5678", "", "Chase");
        assert_eq!(identity_key(&b), "acct_5678_unknown");
    }

    #[test]
    fn test_unparsable_date_falls_back_to_raw() {
        let a = account("****5678", "sometime last year", "Chase");
        assert_eq!(identity_key(&a), "acct_5678_sometime last year");

        // Different unparsable text stays unmerged
        let b = account("****5678", "early 2020s era", "Chase");
        assert_ne!(identity_key(&a), identity_key(&b));
    }

    #[test]
    fn test_creditor_prefix_strips_non_alphabetic() {
        let a = account("", "01/2023", "M&T Bank");
        assert_eq!(identity_key(&a), "name_mt_01_2023");
    }

    #[test]
    fn test_creditor_prefix_splits_on_slash() {
        let a = account("", "01/2023", "SYNCB/Amazon");
        assert_eq!(identity_key(&a), "name_syncb_01_2023");
    }

    #[test]
    fn test_deterministic() {
        let a = account("****1234", "11/21/2025", "Capital One");
        assert_eq!(identity_key(&a), identity_key(&a));
    }
}
