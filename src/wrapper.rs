// CLASSIFICATION: COMMUNITY
// Filename: wrapper.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-02-11

use std::ffi::OsString;

use crate::error::WrapError;
use crate::instance::WrapperInstance;
use crate::{provenance, redirect};

/// Run one wrapper invocation: write the provenance record, then hand the
/// process over to the toolchain tool. The record is durably closed before
/// the redirect is attempted, so a failed redirect still leaves an accurate
/// note of what was being run. Returns only on failure.
#[cfg(unix)]
pub fn run(instance: &WrapperInstance, argv: &[OsString]) -> WrapError {
    if let Err(err) = provenance::record(instance.native_program()) {
        return err;
    }
    redirect::redirect(instance.toolchain_tool(), argv)
}
