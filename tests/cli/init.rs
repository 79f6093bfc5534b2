use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "./src/js");
    assert_eq!(parsed["extension"], ".js");
    assert_eq!(parsed["output"], "missing_i18n.json");
    assert_eq!(
        parsed["excludedDirs"],
        serde_json::json!(["locales", "config", "services", "db"])
    );

    // Turkish letters are written verbatim, not as \u escapes.
    assert!(content.contains("ıiöçşğIÖÇŞĞÜü"));
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .trstringsrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".trstringsrc.json").exists());
    let content = test.read_file(".trstringsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".trstringsrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        "Error: .trstringsrc.json already exists\n"
    );
    assert_eq!(test.read_file(".trstringsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/js/app.js", r#"export const title = "Başlık";"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        test.read_file("missing_i18n.json")?,
        "{\n  \"başlık\": \"Başlık\"\n}\n"
    );

    Ok(())
}
