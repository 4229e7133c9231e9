// 💼 Portfolio Builder - Two-pass positive-asset reconciliation
// Pass 1: blacklist every identity with any excluded record.
// Pass 2: keep records with unanimous Positive bureau status, one
// representative per identity, first occurrence wins.

use crate::classification::excluded_identities;
use crate::identity::identity_key;
use crate::report::MergedAccount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// PORTFOLIO CONSTRUCTION
// ============================================================================

/// Build the deduplicated positive-portfolio list from the full snapshot.
///
/// Policy, preserved exactly:
/// - an identity blacklisted by any record never appears, even via a
///   record that individually looks clean;
/// - records with zero reporting bureaus are silently dropped;
/// - all present bureaus must report Positive - unanimity, not majority
///   (re-checked here independently of the pass-1 blacklist);
/// - duplicates collapse to the first record encountered, so input order
///   decides which duplicate's secondary fields (balance, limit) survive.
///
/// Pure and idempotent: recomputed from scratch on every snapshot update,
/// no state carried between calls.
pub fn build_portfolio(accounts: &[MergedAccount]) -> Vec<MergedAccount> {
    let excluded = excluded_identities(accounts);

    let mut seen: HashSet<String> = HashSet::new();
    let mut portfolio: Vec<MergedAccount> = Vec::new();

    for account in accounts {
        let key = identity_key(account);
        if excluded.contains(&key) {
            continue;
        }

        let bureaus = account.bureaus();
        if bureaus.is_empty() {
            continue;
        }
        if !bureaus.iter().all(|b| b.overall_status.is_positive()) {
            continue;
        }

        if seen.insert(key) {
            portfolio.push(account.clone());
        }
    }

    portfolio
}

// ============================================================================
// PORTFOLIO REPORT
// ============================================================================

/// Portfolio plus run statistics, for display and export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Records in the input snapshot
    pub input_count: usize,

    /// Distinct identities blacklisted in pass 1
    pub excluded_identity_count: usize,

    /// One representative record per qualifying identity
    pub portfolio: Vec<MergedAccount>,

    pub generated_at: DateTime<Utc>,
}

impl PortfolioReport {
    pub fn summary(&self) -> String {
        format!(
            "Portfolio: {} positive assets from {} records ({} identities excluded)",
            self.portfolio.len(),
            self.input_count,
            self.excluded_identity_count
        )
    }
}

/// Run reconciliation and wrap the result with run statistics
pub fn build_portfolio_report(accounts: &[MergedAccount]) -> PortfolioReport {
    let excluded = excluded_identities(accounts);
    PortfolioReport {
        input_count: accounts.len(),
        excluded_identity_count: excluded.len(),
        portfolio: build_portfolio(accounts),
        generated_at: Utc::now(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
