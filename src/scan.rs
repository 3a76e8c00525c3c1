// CLASSIFICATION: COMMUNITY
// Filename: scan.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-11

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::provenance::RECORD_PREFIX;

/// One parsed scratch record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: PathBuf,
    pub native_program: String,
    pub modified: Option<SystemTime>,
}

/// Result of walking the record directory: parsed records plus anything
/// carrying the record prefix that did not parse.
#[derive(Debug, Default)]
pub struct Sweep {
    pub records: Vec<Record>,
    pub malformed: Vec<(PathBuf, String)>,
}

/// Collect every record under `dir`. Files without the record prefix are
/// ignored; files with it that fail to parse are surfaced as malformed.
pub fn sweep(dir: &Path) -> io::Result<Sweep> {
    let mut out = Sweep::default();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(RECORD_PREFIX) {
            continue;
        }
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            out.malformed.push((path, "not a regular file".into()));
            continue;
        }
        match parse_record(&path) {
            Ok(native_program) => {
                let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
                out.records.push(Record {
                    path,
                    native_program,
                    modified,
                });
            }
            Err(reason) => out.malformed.push((path, reason)),
        }
    }
    out.records.sort_by(|a, b| a.path.cmp(&b.path));
    out.malformed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

fn parse_record(path: &Path) -> Result<String, String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => return Err(format!("unreadable: {err}")),
    };
    let Some(name) = text.strip_suffix('\n') else {
        return Err("missing trailing newline".into());
    };
    if name.is_empty() || name.contains('\n') {
        return Err("malformed tool name".into());
    }
    Ok(name.to_string())
}

/// Invocation counts per native tool, in name order.
pub fn summarize(records: &[Record]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.native_program.clone()).or_insert(0) += 1;
    }
    counts
}

/// Delete every record under `dir`, malformed ones included, and return how
/// many files were removed.
pub fn purge(dir: &Path) -> io::Result<usize> {
    let swept = sweep(dir)?;
    let mut removed = 0;
    for record in &swept.records {
        fs::remove_file(&record.path)?;
        removed += 1;
    }
    for (path, _) in &swept.malformed {
        fs::remove_file(path)?;
        removed += 1;
    }
    log::debug!("purged {} records from {}", removed, dir.display());
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::tempdir;

    use crate::provenance::record_in;

    #[test]
    fn sweep_finds_only_records() {
        let dir = tempdir().unwrap();
        record_in(dir.path(), "gcc").unwrap();
        record_in(dir.path(), "strip").unwrap();
        fs::write(dir.path().join("unrelated.txt"), "gcc\n").unwrap();

        let swept = sweep(dir.path()).unwrap();
        assert_eq!(swept.records.len(), 2);
        assert!(swept.malformed.is_empty());
        let names: Vec<_> = swept
            .records
            .iter()
            .map(|r| r.native_program.as_str())
            .collect();
        assert!(names.contains(&"gcc"));
        assert!(names.contains(&"strip"));
    }

    #[test]
    fn truncated_record_is_malformed_not_dropped() {
        let dir = tempdir().unwrap();
        record_in(dir.path(), "gcc").unwrap();
        fs::write(
            dir.path().join(format!("{RECORD_PREFIX}deadbeef00")),
            "gcc",
        )
        .unwrap();

        let swept = sweep(dir.path()).unwrap();
        assert_eq!(swept.records.len(), 1);
        assert_eq!(swept.malformed.len(), 1);
        assert_eq!(swept.malformed[0].1, "missing trailing newline");
    }

    #[test]
    fn summarize_counts_per_tool() {
        let dir = tempdir().unwrap();
        for _ in 0..3 {
            record_in(dir.path(), "gcc").unwrap();
        }
        record_in(dir.path(), "ld").unwrap();

        let swept = sweep(dir.path()).unwrap();
        let counts = summarize(&swept.records);
        assert_eq!(counts.get("gcc"), Some(&3));
        assert_eq!(counts.get("ld"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn purge_retires_everything_with_the_prefix() {
        let dir = tempdir().unwrap();
        record_in(dir.path(), "gcc").unwrap();
        fs::write(dir.path().join(format!("{RECORD_PREFIX}feedface00")), "x").unwrap();
        fs::write(dir.path().join("unrelated.txt"), "keep me").unwrap();

        let removed = purge(dir.path()).unwrap();
        assert_eq!(removed, 2);
        let swept = sweep(dir.path()).unwrap();
        assert!(swept.records.is_empty());
        assert!(swept.malformed.is_empty());
        assert!(dir.path().join("unrelated.txt").exists());
    }
}
