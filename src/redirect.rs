// CLASSIFICATION: COMMUNITY
// Filename: redirect.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-11

use std::ffi::OsString;
use std::path::Path;

use crate::error::WrapError;

/// Rebuild the invocation argument vector around the toolchain tool:
/// position 0 becomes the tool path, positions 1.. are carried over
/// byte-for-byte. Output length equals input length.
pub fn forward_args(tool: &Path, argv: &[OsString]) -> Vec<OsString> {
    let mut forwarded = Vec::with_capacity(argv.len().max(1));
    forwarded.push(tool.as_os_str().to_os_string());
    forwarded.extend(argv.iter().skip(1).cloned());
    forwarded
}

/// Replace the current process image with the toolchain tool, inheriting
/// environment and working directory. On success control never comes back;
/// the return value exists only for the failure paths.
#[cfg(unix)]
pub fn redirect(tool: &Path, argv: &[OsString]) -> WrapError {
    use std::os::unix::process::CommandExt;
    use std::process::Command;

    if !tool.is_file() {
        return WrapError::ToolMissing {
            path: tool.to_path_buf(),
        };
    }

    let forwarded = forward_args(tool, argv);
    log::debug!(
        "exec {} with {} forwarded arguments",
        tool.display(),
        forwarded.len().saturating_sub(1)
    );
    let source = Command::new(tool)
        .arg0(&forwarded[0])
        .args(&forwarded[1..])
        .exec();
    WrapError::Redirect {
        path: tool.to_path_buf(),
        source,
    }
}
