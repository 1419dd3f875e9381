//! Offline receipt scoring.
//!
//! Reads a receipt JSON document from disk and scores it without starting
//! the server. Used by the `receipt-points score` CLI command.

use anyhow::{Context, Result};
use std::path::Path;

use receipt_points_core::models::Receipt;
use receipt_points_core::scoring::{score_breakdown, PointsBreakdown};

/// Reads and decodes the receipt at `path`.
pub fn read_receipt(path: &Path) -> Result<Receipt> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read receipt file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse receipt file: {}", path.display()))
}

/// Core scoring function returning structured data (used by the CLI).
pub fn score_file(path: &Path) -> Result<PointsBreakdown> {
    let receipt = read_receipt(path)?;
    let breakdown = score_breakdown(&receipt);
    tracing::debug!(?breakdown, "Scored {}", path.display());
    Ok(breakdown)
}

/// CLI entry point — scores the file and prints to stdout.
pub fn run_score(path: &Path, explain: bool, json: bool) -> Result<()> {
    let breakdown = score_file(path)?;

    if json {
        let value = serde_json::json!({
            "points": breakdown.total(),
            "rules": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if explain {
        for (rule, points) in breakdown.rules() {
            println!("{:<18} {:>6}", rule, points);
        }
        println!("{:<18} {:>6}", "total", breakdown.total());
    } else {
        println!("{}", breakdown.total());
    }

    Ok(())
}
