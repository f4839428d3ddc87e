use crate::core::branches::{BranchClassification, Category};
use crate::core::classifier::ClassificationRun;
use crate::core::remover::{PrunePlan, PruneResults};
use crate::utils::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub repository: PathBuf,
    pub remote: String,
    pub generated_at: DateTime<Utc>,
    pub skipped: Vec<String>,
    pub branches: BranchClassification,
}

impl ScanReport {
    pub fn new(repository: PathBuf, remote: impl Into<String>, run: ClassificationRun) -> Self {
        Self {
            repository,
            remote: remote.into(),
            generated_at: Utc::now(),
            skipped: run.skipped,
            branches: run.classification,
        }
    }
}

fn heading(category: Category) -> &'static str {
    match category {
        Category::Ok => "Ok",
        Category::Stale => "Stale",
        Category::PendingChanges => "Pending Changes",
    }
}

fn marker(category: Category) -> &'static str {
    match category {
        Category::Ok => "✅",
        Category::Stale => "🗑️ ",
        Category::PendingChanges => "✋",
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "es"
    }
}

pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    let title = format!(
        "🌿 Branch Sweep - {} (remote: {})",
        report.repository.display(),
        report.remote
    );
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}\n", "=".repeat(title.chars().count()));

    if report.branches.is_empty() {
        let _ = writeln!(out, "🧹 No branches to classify");
    }

    for category in Category::ALL {
        let names = report.branches.get(category);
        if names.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({}):", heading(category), names.len());
        for name in names {
            let _ = writeln!(out, "  {} {}", marker(category), name);
        }
        let _ = writeln!(out);
    }

    if !report.skipped.is_empty() {
        let _ = writeln!(
            out,
            "Skipped ({}): {}",
            report.skipped.len(),
            report.skipped.join(", ")
        );
        let _ = writeln!(out);
    }

    let stale = report.branches.stale().len();
    if stale > 0 {
        let _ = writeln!(
            out,
            "Run `branch-sweep prune` to delete {} stale branch{}.",
            stale,
            plural(stale)
        );
    }

    out
}

pub fn render_dry_run(plan: &PrunePlan, classification: &BranchClassification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🧹 Branch Sweep - Dry Run");
    let _ = writeln!(out, "========================\n");

    let _ = writeln!(out, "Would delete ({}):", plan.len());
    for branch in &plan.branches {
        let _ = writeln!(out, "  🗑️  {branch}");
    }

    let pending = classification.pending_changes();
    if !pending.is_empty() {
        let _ = writeln!(out, "\nKept, pending changes ({}):", pending.len());
        for branch in pending {
            let _ = writeln!(out, "  ✋ {branch}");
        }
    }

    out
}

pub fn render_prune_results(results: &PruneResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🧹 Prune Complete");
    let _ = writeln!(out, "================\n");

    if !results.deleted.is_empty() {
        let _ = writeln!(
            out,
            "  ✅ Removed {} stale branch{}",
            results.deleted.len(),
            plural(results.deleted.len())
        );
        for branch in &results.deleted {
            let _ = writeln!(out, "     {branch}");
        }
    }

    if !results.errors.is_empty() {
        let _ = writeln!(out, "\n⚠️  Some branches couldn't be removed:");
        for error in &results.errors {
            let _ = writeln!(out, "  • {error}");
        }
    }

    out
}
