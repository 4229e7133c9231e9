// 📊 Derived Display Metrics - Balance, limit, utilization
// Pure functions over one account; callers format the numbers for display.

use crate::report::{Amount, MergedAccount};
use serde::{Deserialize, Serialize};

/// Max balance across reporting bureaus. Unparsable or missing → 0.0.
pub fn max_balance(account: &MergedAccount) -> f64 {
    account
        .bureaus()
        .into_iter()
        .filter_map(|b| b.balance.as_ref())
        .map(Amount::as_f64)
        .fold(0.0, f64::max)
}

/// Max credit limit across reporting bureaus.
///
/// 0 or absent means "no preset limit" (NPSL) - a display sentinel, not a
/// zero-capacity line. Use `format_limit` for display.
pub fn max_limit(account: &MergedAccount) -> f64 {
    account
        .bureaus()
        .into_iter()
        .filter_map(|b| b.credit_limit.as_ref())
        .map(Amount::as_f64)
        .fold(0.0, f64::max)
}

/// Utilization percentage, or None when no usable limit exists.
///
/// Never surfaces Infinity or NaN: an NPSL account simply has no
/// utilization to display.
pub fn utilization(account: &MergedAccount) -> Option<f64> {
    let limit = max_limit(account);
    if limit > 0.0 {
        Some(max_balance(account) / limit * 100.0)
    } else {
        None
    }
}

/// Display string for the credit limit ("NPSL" instead of "$0")
pub fn format_limit(account: &MergedAccount) -> String {
    let limit = max_limit(account);
    if limit > 0.0 {
        format!("${:.2}", limit)
    } else {
        "NPSL".to_string()
    }
}

// ============================================================================
// UTILIZATION TIER
// ============================================================================

/// Presentation banding for utilization percentages.
///
/// Thresholds are strict: >29% is High, >9% is Middle, the rest is Best -
/// so exactly 10.0% lands in the middle tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilizationTier {
    Best,
    Middle,
    High,
}

impl UtilizationTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent > 29.0 {
            UtilizationTier::High
        } else if percent > 9.0 {
            UtilizationTier::Middle
        } else {
            UtilizationTier::Best
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UtilizationTier::Best => "Excellent (<10%)",
            UtilizationTier::Middle => "Moderate (10-29%)",
            UtilizationTier::High => "High (>29%)",
        }
    }
}

/// Tier for one account, when utilization is defined
pub fn utilization_tier(account: &MergedAccount) -> Option<UtilizationTier> {
    utilization(account).map(UtilizationTier::from_percent)
}

// ============================================================================
// TESTS
// ============================================================================
