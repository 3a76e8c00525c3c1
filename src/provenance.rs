// CLASSIFICATION: COMMUNITY
// Filename: provenance.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-02-11

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::WrapError;

/// Prefix every scratch record carries in the shared temporary directory.
pub const RECORD_PREFIX: &str = "crosswrap-native-";

/// Random filename characters behind each record name. Collision safety
/// rests on this entropy plus the exclusive-create open, not on any
/// cross-process coordination.
pub const RECORD_RAND_CHARS: usize = 10;

/// Directory the wrapper drops records into. Honours TMPDIR.
pub fn record_dir() -> PathBuf {
    env::temp_dir()
}

/// Write one scratch record for this invocation and return its path.
/// The record must be on disk and closed before any redirect is attempted.
pub fn record(native_program: &str) -> Result<PathBuf, WrapError> {
    record_in(&record_dir(), native_program)
}

/// As [`record`], into an explicit directory.
pub fn record_in(dir: &Path, native_program: &str) -> Result<PathBuf, WrapError> {
    let file = Builder::new()
        .prefix(RECORD_PREFIX)
        .rand_bytes(RECORD_RAND_CHARS)
        .tempfile_in(dir)
        .map_err(|source| WrapError::RecordCreate {
            dir: dir.to_path_buf(),
            source,
        })?;

    write_record(file.as_file(), native_program).map_err(|source| WrapError::RecordWrite {
        path: file.path().to_path_buf(),
        source,
    })?;

    // Detach from delete-on-drop: the record outlives this invocation.
    let (_, path) = file.keep().map_err(|e| WrapError::RecordKeep {
        path: e.file.path().to_path_buf(),
        source: e.error,
    })?;
    log::debug!("recorded {} in {}", native_program, path.display());
    Ok(path)
}

fn write_record(mut file: &File, native_program: &str) -> io::Result<()> {
    writeln!(file, "{native_program}")?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
