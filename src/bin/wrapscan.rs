// CLASSIFICATION: COMMUNITY
// Filename: wrapscan.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-03-05

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use humantime::format_duration;

use crosswrap::provenance;
use crosswrap::scan::{self, Sweep};

#[derive(Parser)]
#[command(author, version, about = "Inspect wrapper provenance records")]
struct Cli {
    /// Record directory to scan instead of the shared temporary directory
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List every record with its recorded tool and age
    List,
    /// Count invocations per native tool
    Summary,
    /// Delete all records
    Purge,
}

fn age(modified: Option<SystemTime>) -> String {
    match modified.and_then(|m| SystemTime::now().duration_since(m).ok()) {
        Some(d) => format!("{} ago", format_duration(Duration::from_secs(d.as_secs()))),
        None => "age unknown".to_string(),
    }
}

fn report_malformed(swept: &Sweep) {
    for (path, reason) in &swept.malformed {
        eprintln!("wrapscan: {}: {}", path.display(), reason);
    }
}

fn cmd_list(dir: &Path) -> anyhow::Result<()> {
    let swept = scan::sweep(dir).with_context(|| format!("scanning {}", dir.display()))?;
    for record in &swept.records {
        let stamp = record
            .modified
            .map(|m| DateTime::<Utc>::from(m).to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}  {}  {}  ({})",
            record.path.display(),
            record.native_program,
            stamp,
            age(record.modified)
        );
    }
    report_malformed(&swept);
    if swept.records.is_empty() {
        println!("no records");
    }
    Ok(())
}

fn cmd_summary(dir: &Path) -> anyhow::Result<()> {
    let swept = scan::sweep(dir).with_context(|| format!("scanning {}", dir.display()))?;
    for (name, count) in scan::summarize(&swept.records) {
        println!("{count:>6}  {name}");
    }
    report_malformed(&swept);
    if swept.records.is_empty() {
        println!("no records");
    }
    Ok(())
}

fn cmd_purge(dir: &Path) -> anyhow::Result<()> {
    let removed = scan::purge(dir).with_context(|| format!("purging {}", dir.display()))?;
    println!("purged {removed} records");
    Ok(())
}

pub fn main_entry() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dir = cli.dir.unwrap_or_else(provenance::record_dir);
    match cli.cmd {
        Cmd::List => cmd_list(&dir),
        Cmd::Summary => cmd_summary(&dir),
        Cmd::Purge => cmd_purge(&dir),
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = main_entry() {
        eprintln!("wrapscan: {err}");
        std::process::exit(1);
    }
}
