use std::process::Command;

use anyhow::{Context, Result};

const PACKAGE: &str = "cronspan-common";

const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default
    &["foundation"],
];

/// Check that every `cronspan-common` feature tier compiles on its own.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} {PACKAGE} feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let label = if features.is_empty() { "default" } else { joined.as_str() };

        let mut command = Command::new("cargo");
        command.args(["check", "-p", PACKAGE, "--no-default-features", "--all-targets"]);
        if !features.is_empty() {
            command.args(["--features", joined.as_str()]);
        }

        println!("\n[{}/{}] {command:?}", index + 1, FEATURE_COMBINATIONS.len());

        let status =
            command.status().with_context(|| format!("Failed to run cargo check for '{label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed to compile");
        }

        println!("✅ Features '{label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}
