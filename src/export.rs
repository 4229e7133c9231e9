// 📤 Portfolio Export - CSV output for consultant review
// One row per qualifying account with derived metrics pre-computed.

use crate::metrics::{format_limit, max_balance, utilization, utilization_tier};
use crate::report::MergedAccount;
use anyhow::{Context, Result};
use std::path::Path;

const BUREAU_NAMES: [&str; 3] = ["Experian", "Equifax", "TransUnion"];

/// Write the computed portfolio to a CSV file.
///
/// Columns: creditor, account number, date opened, max balance, credit
/// limit (NPSL-aware), utilization %, tier, reporting bureaus.
pub fn write_portfolio_csv<P: AsRef<Path>>(path: P, portfolio: &[MergedAccount]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("Failed to create CSV file: {:?}", path.as_ref()))?;

    writer.write_record([
        "creditor",
        "account_number",
        "date_opened",
        "max_balance",
        "credit_limit",
        "utilization_pct",
        "utilization_tier",
        "reporting_bureaus",
    ])?;

    for account in portfolio {
        let balance = format!("{:.2}", max_balance(account));
        let limit = format_limit(account);
        let utilization_pct = utilization(account)
            .map(|u| format!("{:.1}", u))
            .unwrap_or_default();
        let tier = utilization_tier(account)
            .map(|t| t.label().to_string())
            .unwrap_or_default();
        let bureaus = reporting_bureaus(account);

        writer.write_record([
            account.creditor_name.as_str(),
            account.account_number.as_str(),
            account.date_opened.as_str(),
            balance.as_str(),
            limit.as_str(),
            utilization_pct.as_str(),
            tier.as_str(),
            bureaus.as_str(),
        ])?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// "Experian, TransUnion" style list of bureaus that reported the account
fn reporting_bureaus(account: &MergedAccount) -> String {
    let present = [&account.experian, &account.equifax, &account.transunion];
    BUREAU_NAMES
        .iter()
        .zip(present.iter())
        .filter(|(_, data)| data.is_some())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================
