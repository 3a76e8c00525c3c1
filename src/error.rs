// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2025-11-04

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a wrapper invocation can hit before the toolchain tool takes
/// over. All of them are fatal at this layer; the binaries print the chain
/// and exit non-zero.
#[derive(Debug, Error)]
pub enum WrapError {
    #[error("scratch record allocation in {} failed: {source}", dir.display())]
    RecordCreate {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scratch record write to {} failed: {source}", path.display())]
    RecordWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scratch record {} could not be kept: {source}", path.display())]
    RecordKeep {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("toolchain tool {} does not exist", path.display())]
    ToolMissing { path: PathBuf },

    #[error("redirect to {} failed: {source}", path.display())]
    Redirect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid wrapper instance: {0}")]
    Instance(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_operation() {
        let err = WrapError::RecordCreate {
            dir: PathBuf::from("/tmp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("scratch record allocation"));
        assert!(text.contains("/tmp"));

        let err = WrapError::ToolMissing {
            path: PathBuf::from("/opt/cross/bin/gcc"),
        };
        assert!(err.to_string().contains("/opt/cross/bin/gcc"));
    }
}
