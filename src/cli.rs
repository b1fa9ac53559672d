use crate::backup::{run_backup, BackupReport, FileStatus};
use crate::config::load_config;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Split files into fixed-size chunks, each compressed into its own zip archive.
#[derive(Parser, Debug)]
#[command(name = "splitzip", version, about)]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Date used for the date folder (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Also write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Entry point shared by main() and the integration tests.
///
/// Configuration problems come back as errors; per-file failures are part of
/// the returned report.
pub fn run(cli: Cli) -> Result<BackupReport> {
    let config = load_config(&cli.config).context("Configuration error")?;

    let now = Local::now().naive_local();
    let started = match cli.date {
        Some(date) => date.and_time(now.time()),
        None => now,
    };

    let report = run_backup(&config, started).context("Failed to start backup run")?;

    if let Some(path) = &cli.report {
        write_report(&report, path)?;
    }

    print_summary(&report);
    Ok(report)
}

fn write_report(report: &BackupReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json).context(format!("Failed to write report: {}", path.display()))?;
    tracing::info!(report = %path.display(), "Report written");
    Ok(())
}

fn print_summary(report: &BackupReport) {
    if report.matched() == 0 {
        println!("No files with the allowed extensions were found.");
    }

    for outcome in &report.files {
        match &outcome.status {
            FileStatus::Archived { chunks } => {
                println!("  ✓ {} ({} chunks)", outcome.source.display(), chunks)
            }
            FileStatus::Failed { reason } => {
                println!("  ✗ {}: {}", outcome.source.display(), reason)
            }
        }
    }

    println!("Files matched:        {}", report.matched());
    println!("Files archived:       {}", report.succeeded());
    println!("Files failed:         {}", report.failed());
    println!("Chunks written:       {}", report.total_chunks());
    println!("Process completed!");
}
