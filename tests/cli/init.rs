use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    // 1. Parse as JSON
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    // 2. Verify expected fields exist
    assert!(
        parsed.get("localesRoot").is_some(),
        "Config should have 'localesRoot' field"
    );
    assert!(
        parsed.get("sourceRoot").is_some(),
        "Config should have 'sourceRoot' field"
    );
    assert!(
        parsed.get("extensions").is_some(),
        "Config should have 'extensions' field"
    );

    // 3. Verify formatting (2-space indentation)
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Created .lingorc.json"), "stdout: {}", stdout);

    // Verify file exists
    assert!(test.root().join(".lingorc.json").exists());

    // Verify content is valid and has expected structure
    let content = test.read_file(".lingorc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;
    assert_eq!(code, 1);
    assert!(stderr.contains(".lingorc.json already exists"), "stderr: {}", stderr);

    // The existing file is left alone
    assert_eq!(test.read_file(".lingorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    // Initialize config
    test.command().arg("init").output()?;

    // Create a minimal project
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;
    test.write_file("src/App.vue", "<h1>{{ t('greeting') }}</h1>\n")?;

    // Verify the check command works with the initialized config
    let output = test.command().arg("check").output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"), "stdout: {}", stdout);

    Ok(())
}
