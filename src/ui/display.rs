//! Display functions for reconcile plans and package records
//!
//! Every printer has a `render_*` counterpart returning the plain text, which
//! is what the tests check; styling is only applied when printing.

use console::Style;

use crate::domain::AssetRef;
use crate::reconcile::{ReconcileOutcome, ReconcilePlan};
use crate::store::PackageRecord;

fn heading(text: &str) -> String {
    Style::new().bold().apply_to(text).to_string()
}

/// Plan as a list of `- id` / `+ id` lines
pub fn render_plan(plan: &ReconcilePlan) -> Vec<String> {
    if plan.is_noop() {
        return vec!["Transforms are up to date.".to_string()];
    }

    let mut lines = Vec::new();
    for asset in &plan.to_remove {
        lines.push(format!("- {}", asset.id));
    }
    for target in &plan.to_install {
        lines.push(format!("+ {}  ({})", target.id, target.path));
    }
    lines
}

/// Print what a reconcile of `package` would do
pub fn print_plan(package: &str, version: &str, plan: &ReconcilePlan) {
    println!("{}", heading(&format!("Plan for {package} {version}:")));
    for line in render_plan(plan) {
        let style = if line.starts_with("- ") {
            Style::new().red()
        } else if line.starts_with("+ ") {
            Style::new().green()
        } else {
            Style::new()
        };
        println!("  {}", style.apply_to(line));
    }
}

pub fn render_outcome(outcome: &ReconcileOutcome) -> String {
    format!(
        "{} removed, {} installed, {} assets recorded",
        outcome.removed.len(),
        outcome.installed.len(),
        outcome.inventory.len()
    )
}

/// Print the summary of a completed reconcile
pub fn print_outcome(package: &str, version: &str, outcome: &ReconcileOutcome) {
    println!(
        "{} {} {}",
        Style::new().bold().green().apply_to("Installed"),
        Style::new().bold().yellow().apply_to(package),
        version
    );
    for asset in &outcome.removed {
        println!("  {} {}", Style::new().red().apply_to("removed"), asset.id);
    }
    for asset in &outcome.installed {
        println!("  {} {}", Style::new().green().apply_to("started"), asset.id);
    }
    println!("  {}", render_outcome(outcome));
}

/// Print transforms torn down for `package`
pub fn print_removed(package: &str, removed: &[AssetRef]) {
    if removed.is_empty() {
        println!("No transforms installed for {package}.");
        return;
    }
    println!(
        "{}",
        heading(&format!("Removed {} transform(s) from {package}:", removed.len()))
    );
    for asset in removed {
        println!("  - {}", asset.id);
    }
}

pub fn render_record(record: &PackageRecord) -> Vec<String> {
    let mut lines = vec![format!("{} {}", record.name, record.version)];
    for asset in &record.installed_es {
        lines.push(format!("    {} ({})", asset.id, asset.asset_type));
    }
    lines
}

/// Print package records with their inventories
pub fn print_records(records: &[PackageRecord]) {
    if records.is_empty() {
        println!("No packages installed.");
        return;
    }

    println!("Installed packages ({}):", records.len());
    println!();
    for record in records {
        let mut lines = render_record(record).into_iter();
        if let Some(title) = lines.next() {
            println!("  {}", Style::new().bold().yellow().apply_to(title));
        }
        for line in lines {
            println!("  {line}");
        }
    }
}
