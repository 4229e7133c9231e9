// 📋 Report Snapshot Model - Merged credit-bureau account records
// Input contract: one JSON snapshot per client report, full replacement on update

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// AMOUNT (number-or-string money field)
// ============================================================================

/// Money field as delivered by the report pipeline.
///
/// Upstream parsing is best-effort, so a balance may arrive as `1234.56`,
/// `"$1,234.56"`, `"1234"`, or be missing entirely. Normalization to f64
/// strips everything except digits and the decimal point; anything still
/// unparsable becomes 0.0 rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Normalize to a plain number. Unparsable text → 0.0.
    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Number(n) => *n,
            Amount::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                cleaned.parse::<f64>().unwrap_or(0.0)
            }
        }
    }
}

// ============================================================================
// OVERALL STATUS
// ============================================================================

/// Per-bureau classification computed upstream.
///
/// Any value other than the two known ones deserializes to `Unknown`
/// instead of failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum OverallStatus {
    Positive,
    Negative,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for OverallStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value.as_deref() {
            Some("Positive") => OverallStatus::Positive,
            Some("Negative") => OverallStatus::Negative,
            _ => OverallStatus::Unknown,
        })
    }
}

impl OverallStatus {
    pub fn is_positive(&self) -> bool {
        matches!(self, OverallStatus::Positive)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, OverallStatus::Negative)
    }
}

// ============================================================================
// BUREAU DATA
// ============================================================================

/// One bureau's view of an account. Absent = bureau did not report it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BureauData {
    /// Externally computed "Positive" / "Negative" classification
    #[serde(default)]
    pub overall_status: OverallStatus,

    /// Free-text status (e.g. "Paid", "Charged Off", "Collection")
    #[serde(default)]
    pub account_status: String,

    /// Balance as number or formatted string
    #[serde(default)]
    pub balance: Option<Amount>,

    /// Credit limit; 0/absent means "no preset limit" (NPSL), not zero capacity
    #[serde(default)]
    pub credit_limit: Option<Amount>,

    #[serde(default)]
    pub last_reported: Option<String>,

    #[serde(default)]
    pub payment_history: Option<String>,

    #[serde(default)]
    pub dispute_status: Option<String>,

    #[serde(default)]
    pub consultant_note: Option<String>,
}

// ============================================================================
// MERGED ACCOUNT
// ============================================================================

/// Sentinel for unprovided date fields
pub const NOT_PROVIDED: &str = "Not Provided";

/// Sentinel account type for inquiry rows mixed into the account list
pub const HARD_INQUIRY: &str = "Hard Inquiry";

/// One logical tradeline, already merged across bureaus by the ingestion
/// pipeline. The reconciliation engine treats these as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MergedAccount {
    /// Stable row id from the source report (may contain '/' and other
    /// characters unsafe for document-store paths)
    #[serde(default)]
    pub row_id: String,

    /// Display name of the furnisher
    #[serde(default)]
    pub creditor_name: String,

    /// May be partial/masked ("****1234") or absent
    #[serde(default)]
    pub account_number: String,

    #[serde(default)]
    pub account_type: String,

    /// Free-text date, often MM/DD/YYYY, sometimes MM/YYYY or "Not Provided"
    #[serde(default)]
    pub date_opened: String,

    #[serde(default)]
    pub date_closed: String,

    #[serde(default)]
    pub experian: Option<BureauData>,

    #[serde(default)]
    pub equifax: Option<BureauData>,

    #[serde(default)]
    pub transunion: Option<BureauData>,
}

impl MergedAccount {
    /// Bureau sub-records that actually reported this account, in fixed
    /// Experian / Equifax / TransUnion order.
    pub fn bureaus(&self) -> Vec<&BureauData> {
        [&self.experian, &self.equifax, &self.transunion]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn is_hard_inquiry(&self) -> bool {
        self.account_type == HARD_INQUIRY
    }

    /// Explicitly closed by date (non-empty, not the "Not Provided" sentinel)
    pub fn has_close_date(&self) -> bool {
        let closed = self.date_closed.trim();
        !closed.is_empty() && closed != NOT_PROVIDED
    }
}

// ============================================================================
// INQUIRY
// ============================================================================

/// Hard-inquiry entry from the report's separate inquiries array
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(default)]
    pub creditor_name: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub bureau: Option<String>,
}

// ============================================================================
// REPORT SNAPSHOT
// ============================================================================

/// Full report snapshot attached to a client report document.
///
/// Updates arrive as whole-snapshot replacements, never deltas, so the
/// engine always recomputes from the complete account list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    #[serde(default)]
    pub merged_accounts: Vec<MergedAccount>,

    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
}

impl ReportSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse report snapshot JSON")
    }

    /// Load a snapshot from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read report file: {:?}", path.as_ref()))?;
        Self::from_json(&content)
    }
}

// ============================================================================
// TESTS
// ============================================================================
