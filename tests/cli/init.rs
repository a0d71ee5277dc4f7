use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(
        parsed.get("paths"),
        Some(&serde_json::json!(["src"])),
        "Config should default 'paths' to [\"src\"]"
    );

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .routablerc.json"));
    assert!(test.root().join(".routablerc.json").exists());

    let content = test.read_file(".routablerc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".routablerc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".routablerc.json already exists"));
    assert_eq!(test.read_file(".routablerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/app.ts", "export const ROUTABLE_TARGETS = ['app'];")?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
