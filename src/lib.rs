// Tradeline Reconciliation - Core Library
// Account identity fingerprinting, exclusion classification, and
// positive-portfolio construction over merged credit-bureau records.

pub mod classification;
pub mod export;
pub mod identity;
pub mod metrics;
pub mod portfolio;
pub mod report;

// Re-export commonly used types
pub use classification::{exclusion_reason, excluded_identities, is_excluded, ExclusionReason};
pub use export::write_portfolio_csv;
pub use identity::identity_key;
pub use metrics::{
    format_limit, max_balance, max_limit, utilization, utilization_tier, UtilizationTier,
};
pub use portfolio::{build_portfolio, build_portfolio_report, PortfolioReport};
pub use report::{
    Amount, BureauData, Inquiry, MergedAccount, OverallStatus, ReportSnapshot, HARD_INQUIRY,
    NOT_PROVIDED,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
