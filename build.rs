// CLASSIFICATION: COMMUNITY
// Filename: build.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-02-11

fn main() {
    use std::{env, path::PathBuf, process};

    println!("cargo:rerun-if-env-changed=CROSSWRAP_TOOLCHAIN_TOOL");
    println!("cargo:rerun-if-env-changed=CROSSWRAP_NATIVE_PROGRAM");

    let tool = env::var("CROSSWRAP_TOOLCHAIN_TOOL")
        .ok()
        .filter(|v| !v.is_empty());
    let native = env::var("CROSSWRAP_NATIVE_PROGRAM")
        .ok()
        .filter(|v| !v.is_empty());

    let (tool, native) = match (tool, native) {
        (Some(tool), Some(native)) => (tool, native),
        (None, None) => {
            // Standalone build: bake a self-contained instance around echo so
            // the produced wrapper is runnable without a generator.
            let echo = which::which("echo").unwrap_or_else(|_| PathBuf::from("/bin/echo"));
            println!(
                "cargo:warning=CROSSWRAP_TOOLCHAIN_TOOL unset; baking default instance around {}",
                echo.display()
            );
            (echo.display().to_string(), "echo".to_string())
        }
        _ => {
            println!(
                "cargo:warning=CROSSWRAP_TOOLCHAIN_TOOL and CROSSWRAP_NATIVE_PROGRAM must be set together"
            );
            process::exit(1);
        }
    };

    println!("cargo:rustc-env=CROSSWRAP_TOOLCHAIN_TOOL={tool}");
    println!("cargo:rustc-env=CROSSWRAP_NATIVE_PROGRAM={native}");
}
