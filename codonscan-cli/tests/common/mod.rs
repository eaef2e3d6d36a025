#![allow(dead_code)]

use assert_cmd::Command;

/// Runs the codonscan CLI with given arguments and returns its stdout
pub fn run_codonscan(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("codonscan")?;
    cmd.args(args);

    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Runs the codonscan CLI and returns its stderr, expecting a failure
pub fn run_codonscan_failing(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("codonscan")?;
    cmd.args(args);

    let output = cmd.assert().failure().get_output().stderr.clone();
    Ok(String::from_utf8(output)?)
}

/// Normalize dynamic fields in outputs to reduce snapshot churn.
/// Currently replaces the crate version embedded in GFF output.
pub fn normalize_output(s: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    s.replace(&format!("codonscan.v{version}"), "codonscan.vX")
        .replace(&format!("codonscan_v{version}"), "codonscan_vX")
}
