use anyhow::{bail, Result};
use std::env;

use tradeline_recon::{
    build_portfolio_report, format_limit, max_balance, utilization, utilization_tier,
    write_portfolio_csv, ReportSnapshot,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tradeline-recon <report.json> [--csv <out.csv>]");
        std::process::exit(1);
    }

    let report_path = &args[1];
    let csv_path = parse_csv_flag(&args)?;

    // 1. Load snapshot
    println!("📂 Loading report snapshot...");
    let snapshot = ReportSnapshot::from_file(report_path)?;
    println!(
        "✓ Loaded {} merged accounts, {} inquiries",
        snapshot.merged_accounts.len(),
        snapshot.inquiries.len()
    );

    // 2. Reconcile
    println!("\n⚖️  Building positive portfolio...");
    let report = build_portfolio_report(&snapshot.merged_accounts);
    println!("✓ {}", report.summary());

    // 3. Print portfolio table
    if report.portfolio.is_empty() {
        println!("\n(no qualifying positive accounts)");
    } else {
        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for account in &report.portfolio {
            let utilization_display = match utilization(account) {
                Some(pct) => format!("{:.1}%", pct),
                None => "---".to_string(),
            };
            let tier_display = utilization_tier(account)
                .map(|t| t.label())
                .unwrap_or("---");

            println!(
                "{:<28} {:>12} bal ${:<10.2} limit {:<10} util {:<7} {}",
                account.creditor_name,
                account.account_number,
                max_balance(account),
                format_limit(account),
                utilization_display,
                tier_display,
            );
        }
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    // 4. Optional CSV export
    if let Some(csv_path) = csv_path {
        println!("\n💾 Exporting portfolio to {}...", csv_path);
        write_portfolio_csv(&csv_path, &report.portfolio)?;
        println!("✓ Exported {} accounts", report.portfolio.len());
    }

    Ok(())
}

fn parse_csv_flag(args: &[String]) -> Result<Option<String>> {
    match args.iter().position(|a| a == "--csv") {
        Some(i) => match args.get(i + 1) {
            Some(path) => Ok(Some(path.clone())),
            None => bail!("--csv requires an output path"),
        },
        None => Ok(None),
    }
}
