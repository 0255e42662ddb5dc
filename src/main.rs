use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;

use receipt_points::config::{CliArgs, Command};
use receipt_points::{PointsBreakdown, Receipt};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    match args.command {
        Command::Score { files, json } => {
            for file in &files {
                run_score(file, json)?;
            }
        }
    }

    Ok(())
}

fn run_score(path: &Path, json: bool) -> Result<()> {
    let body = fs::read(path).with_context(|| format!("Failed to read receipt file: {:?}", path))?;
    let receipt = Receipt::from_json(&body)
        .with_context(|| format!("Failed to parse receipt: {:?}", path))?;
    let breakdown = PointsBreakdown::for_receipt(&receipt);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("🧾 {} ({})", path.display(), receipt.retailer);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for score in &breakdown.rules {
        println!("  {:<26} {:>6}", score.rule.name(), score.points);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:<26} {:>6}\n", "Total", breakdown.total);

    Ok(())
}
