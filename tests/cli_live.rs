//! Live CLI test. Run with: `cargo test --features online --test cli_live -- --nocapture`
#![cfg(feature = "online")]

use std::process::Command;

#[test]
fn run_cli_and_save_plot() {
    // Cargo sets this to the path of the compiled binary named as in Cargo.toml [[bin]].
    let exe = env!("CARGO_BIN_EXE_quakes");
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("quakes_cli.png");
    let out = dir.path().join("quakes_cli.json");
    let status = Command::new(exe)
        .args(["--hours", "72", "--min-mag", "3", "--limit", "10", "--order", "time", "--no-show"])
        .arg("--save-plot")
        .arg(&plot)
        .arg("--out")
        .arg(&out)
        .status()
        .expect("spawn cli");
    assert!(status.success());
    assert!(out.exists());
}
