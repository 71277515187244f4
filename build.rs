use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = capture("git", &["rev-parse", "--short", "HEAD"])
        .filter(|s| !s.is_empty())
        .unwrap_or_else(unknown);
    emit("HASH", &hash);

    let status = capture("git", &["status", "--porcelain"])
        .map(|s| if s.is_empty() { "clean" } else { "dirty" }.to_string())
        .unwrap_or_else(unknown);
    emit("STATUS", &status);

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    emit("TIMESTAMP", &timestamp);

    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| unknown()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| unknown()));
    emit(
        "RUSTC",
        &capture("rustc", &["--version"]).unwrap_or_else(unknown),
    );
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=BUDGET_BEE_BUILD_{key}={value}");
}

fn unknown() -> String {
    "unknown".to_string()
}

/// Runs a command and returns its trimmed stdout when it exits successfully.
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
