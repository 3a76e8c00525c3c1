// CLASSIFICATION: COMMUNITY
// Filename: test_wrapper_failures.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-02-12

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn unusable_record_directory_aborts_before_redirect() {
    let tmp = tempdir().unwrap();
    let gone = tmp.path().join("missing");

    let output = Command::cargo_bin("crosswrap")
        .unwrap()
        .env("TMPDIR", &gone)
        .arg("should-not-print")
        .output()
        .expect("run crosswrap");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("crosswrap:"));
    assert!(stderr.contains("scratch record allocation"));
}
