// 🚫 Exclusion Classification - The "forbidden identity" blacklist test
// One bureau's derogatory report about an account vetoes the whole identity,
// even when other bureaus disagree.

use crate::identity::identity_key;
use crate::report::MergedAccount;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Derogatory status fragments that mark an account as closed or negative.
/// Matched case-insensitively against each bureau's free-text accountStatus.
const DEROGATORY_STATUS_FRAGMENTS: [&str; 4] = ["closed", "paid", "charged", "collection"];

// ============================================================================
// EXCLUSION REASON
// ============================================================================

/// Why an account was excluded from the positive portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExclusionReason {
    /// dateClosed is present and not the "Not Provided" sentinel
    ClosedByDate,

    /// A bureau's accountStatus text contains a derogatory fragment
    /// (closed / paid / charged / collection)
    DerogatoryStatus(String),

    /// A bureau classified this account as Negative
    NegativeBureau,

    /// Hard inquiries are never portfolio assets, by type
    HardInquiry,
}

impl ExclusionReason {
    pub fn describe(&self) -> String {
        match self {
            ExclusionReason::ClosedByDate => "closed by date".to_string(),
            ExclusionReason::DerogatoryStatus(status) => {
                format!("derogatory status \"{}\"", status)
            }
            ExclusionReason::NegativeBureau => "negative bureau classification".to_string(),
            ExclusionReason::HardInquiry => "hard inquiry".to_string(),
        }
    }
}

// ============================================================================
// PER-RECORD EXCLUSION TEST
// ============================================================================

/// Test one record against the exclusion rules.
///
/// Returns the first triggered reason, checked in order: explicit close
/// date, derogatory status text, negative bureau, hard inquiry. Returns
/// None for records that individually look clean - but note that exclusion
/// is keyed by identity, so a clean record can still be blacklisted by a
/// sibling record sharing its identity key (see `excluded_identities`).
pub fn exclusion_reason(account: &MergedAccount) -> Option<ExclusionReason> {
    if account.has_close_date() {
        return Some(ExclusionReason::ClosedByDate);
    }

    for bureau in account.bureaus() {
        let status = bureau.account_status.to_lowercase();
        if DEROGATORY_STATUS_FRAGMENTS.iter().any(|f| status.contains(*f)) {
            return Some(ExclusionReason::DerogatoryStatus(bureau.account_status.clone()));
        }
    }

    if account.bureaus().iter().any(|b| b.overall_status.is_negative()) {
        return Some(ExclusionReason::NegativeBureau);
    }

    if account.is_hard_inquiry() {
        return Some(ExclusionReason::HardInquiry);
    }

    None
}

pub fn is_excluded(account: &MergedAccount) -> bool {
    exclusion_reason(account).is_some()
}

// ============================================================================
// IDENTITY BLACKLIST (pass 1)
// ============================================================================

/// Collect the identity keys vetoed by any record in the list.
///
/// If any record sharing an identity key triggers exclusion, the whole
/// identity is blacklisted - even if another record under the same key
/// would individually look clean.
pub fn excluded_identities(accounts: &[MergedAccount]) -> HashSet<String> {
    let mut excluded = HashSet::new();

    for account in accounts {
        if is_excluded(account) {
            excluded.insert(identity_key(account));
        }
    }

    excluded
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{BureauData, OverallStatus, HARD_INQUIRY};

    fn positive_bureau(account_status: &str) -> BureauData {
        BureauData {
            overall_status: OverallStatus::Positive,
            account_status: account_status.to_string(),
            ..Default::default()
        }
    }

    fn open_account(row_id: &str) -> MergedAccount {
        MergedAccount {
            row_id: row_id.to_string(),
            creditor_name: "Capital One".to_string(),
            account_number: "****1234".to_string(),
            account_type: "Credit Card".to_string(),
            date_opened: "03/2020".to_string(),
            date_closed: "".to_string(),
            experian: Some(positive_bureau("Current")),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_account_not_excluded() {
        assert_eq!(exclusion_reason(&open_account("a1")), None);
    }

    #[test]
    fn test_close_date_excludes_despite_positive_status() {
        let mut account = open_account("a1");
        account.date_closed = "01/2024".to_string();
        assert_eq!(exclusion_reason(&account), Some(ExclusionReason::ClosedByDate));
    }

    #[test]
    fn test_derogatory_status_text_excludes() {
        for status in ["Charged Off", "PAID IN FULL", "Account closed", "In Collection"] {
            let mut account = open_account("a1");
            account.experian = Some(positive_bureau(status));
            assert!(
                matches!(
                    exclusion_reason(&account),
                    Some(ExclusionReason::DerogatoryStatus(_))
                ),
                "expected exclusion for status {:?}",
                status
            );
        }
    }

    #[test]
    fn test_single_negative_bureau_excludes() {
        let mut account = open_account("a1");
        account.equifax = Some(BureauData {
            overall_status: OverallStatus::Negative,
            account_status: "Current".to_string(),
            ..Default::default()
        });
        assert_eq!(exclusion_reason(&account), Some(ExclusionReason::NegativeBureau));
    }

    #[test]
    fn test_hard_inquiry_excluded_by_type() {
        let mut account = open_account("a1");
        account.account_type = HARD_INQUIRY.to_string();
        assert_eq!(exclusion_reason(&account), Some(ExclusionReason::HardInquiry));
    }

    #[test]
    fn test_blacklist_keyed_by_identity() {
        let clean = open_account("a1");
        let mut dirty = open_account("a2");
        dirty.equifax = Some(BureauData {
            overall_status: OverallStatus::Negative,
            ..Default::default()
        });

        let excluded = excluded_identities(&[clean.clone(), dirty]);
        assert_eq!(excluded.len(), 1);
        assert!(excluded.contains(&identity_key(&clean)));
    }

    #[test]
    fn test_reason_descriptions() {
        assert_eq!(ExclusionReason::ClosedByDate.describe(), "closed by date");
        assert_eq!(
            ExclusionReason::DerogatoryStatus("Charged Off".to_string()).describe(),
            "derogatory status \"Charged Off\""
        );
        assert_eq!(ExclusionReason::HardInquiry.describe(), "hard inquiry");
    }

    #[test]
    fn test_no_bureau_data_is_not_excluded_here() {
        // Zero-bureau records are dropped in pass 2, not blacklisted in pass 1
        let account = MergedAccount {
            row_id: "a1".to_string(),
            creditor_name: "Chase".to_string(),
            date_opened: "01/2021".to_string(),
            ..Default::default()
        };
        assert_eq!(exclusion_reason(&account), None);
    }
}
