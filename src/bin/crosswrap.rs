// CLASSIFICATION: COMMUNITY
// Filename: crosswrap.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-11

//! Generated cross-toolchain wrapper entry point. Invoked exactly as the
//! shadowed native tool would be; the argument vector belongs to the
//! toolchain tool and is forwarded unexamined, so there is no CLI parsing
//! here on purpose.

use std::env;
use std::ffi::OsString;

use crosswrap::{wrapper, WrapperInstance};

pub fn main_entry() -> anyhow::Result<()> {
    let instance = WrapperInstance::baked()?;
    let argv: Vec<OsString> = env::args_os().collect();
    log::debug!(
        "wrapping {} -> {}",
        instance.native_program(),
        instance.toolchain_tool().display()
    );
    Err(wrapper::run(&instance, &argv).into())
}

fn main() {
    env_logger::init();
    if let Err(err) = main_entry() {
        eprintln!("crosswrap: {err}");
        std::process::exit(1);
    }
}
