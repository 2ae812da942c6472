//! Stamps build metadata reported by `/health`

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let built_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    emit("BUILD_TIME", built_at.to_string());

    let docs_rs = env::var_os("DOCS_RS").is_some();
    let git_hash = if docs_rs {
        Some("docs-rs-build".to_string())
    } else {
        command_output("git", &["rev-parse", "--short", "HEAD"])
    };
    emit("GIT_HASH", git_hash.unwrap_or_else(|| "unknown".to_string()));

    // Cargo hands build scripts the compiler it will use
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    emit(
        "RUST_VERSION",
        command_output(&rustc, &["--version"]).unwrap_or_else(|| "unknown".to_string()),
    );

    emit(
        "BUILD_PROFILE",
        env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()),
    );

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-env-changed=DOCS_RS");
}

fn emit(key: &str, value: String) {
    println!("cargo:rustc-env={}={}", key, value);
}

/// Trimmed stdout of a successful command
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
