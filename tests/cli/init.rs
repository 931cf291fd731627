use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Created .locgenrc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".locgenrc.json")?)?;
    assert_eq!(
        config,
        json!({
            "input": "src/translations/index.ts",
            "outputDir": "public/locales",
            "tempDir": ".temp",
            "defaultLocale": "en-us",
            "missingValue": "null"
        })
    );
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locgenrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains(".locgenrc.json already exists"));
    assert_eq!(test.read_file(".locgenrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_generated_config_is_used() -> Result<()> {
    let test = CliTest::with_catalog()?;

    test.command().arg("init").output()?;
    let output = test.generate_command().output()?;

    assert!(output.status.success());
    assert!(test.root().join("public/locales/en-us.json").exists());
    Ok(())
}
