use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("Locale file should be valid JSON")
}

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.list_dir("public/locales")?,
        vec!["en-us.json", "fr.json", "jp.json"]
    );
    assert!(!test.root().join(".temp").exists());

    let out = stdout(&output);
    assert!(out.contains("Input file: src/translations/index.ts"));
    assert!(out.contains("Generated 3 locale files from 2 keys"));

    insta::assert_snapshot!(test.read_file("public/locales/fr.json")?.trim_end(), @r#"
[
  {
    "Key": "GOODBYE",
    "Value": "Au revoir"
  },
  {
    "Key": "WELCOME",
    "Value": "Bienvenue"
  }
]
"#);
    Ok(())
}

#[test]
fn test_generate_without_subcommand() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("public/locales/jp.json").exists());
    assert_eq!(
        parse(&test.read_file("public/locales/jp.json")?)?,
        json!([
            { "Key": "GOODBYE", "Value": "さようなら" },
            { "Key": "WELCOME", "Value": "ようこそ" }
        ])
    );
    Ok(())
}

#[test]
fn test_generate_from_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/catalog.json",
        r#"{
  "locales": ["en-us", "fr"],
  "translations": [{ "key": "HI", "en-us": "Hi", "fr": "Salut" }]
}"#,
    )?;

    let output = test
        .command()
        .env("TRANSLATIONS_INPUT_FILE", "i18n/catalog.json")
        .env("LOCALES_OUTPUT_DIRECTORY", "dist/locales")
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.list_dir("dist/locales")?, vec!["en-us.json", "fr.json"]);
    insta::assert_snapshot!(test.read_file("dist/locales/en-us.json")?.trim_end(), @r#"
[
  {
    "Key": "HI",
    "Value": "Hi"
  }
]
"#);
    Ok(())
}

#[test]
fn test_flags_override_environment() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .generate_command()
        .env("LOCALES_OUTPUT_DIRECTORY", "from-env")
        .args(["--output", "from-flag"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("from-flag/fr.json").exists());
    assert!(!test.root().join("from-env").exists());
    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locgenrc.json",
        r#"{ "input": "catalog.json", "outputDir": "locales", "missingValue": "omit" }"#,
    )?;
    test.write_file(
        "catalog.json",
        r#"{ "locales": ["de"], "translations": [{ "key": "HI", "en-us": "Hi" }] }"#,
    )?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        parse(&test.read_file("locales/de.json")?)?,
        json!([{ "Key": "HI" }])
    );
    Ok(())
}

#[test]
fn test_missing_value_is_null_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "catalog.ts",
        r#"export const locales = ['en-us', 'de'];
export const translations = [{ key: 'HI', 'en-us': 'Hi' }];"#,
    )?;

    let output = test.generate_command().args(["-i", "catalog.ts"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        parse(&test.read_file("public/locales/de.json")?)?,
        json!([{ "Key": "HI", "Value": null }])
    );
    Ok(())
}

#[test]
fn test_empty_locales_fall_back_to_en_us() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "catalog.ts",
        r#"export const locales = [];
export const translations = [{ key: 'HI', 'en-us': 'Hi', fr: 'Salut' }];"#,
    )?;

    let output = test.generate_command().args(["-i", "catalog.ts"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.list_dir("public/locales")?, vec!["en-us.json"]);
    assert!(stderr(&output).contains("defaulting to [\"en-us\"]"));
    Ok(())
}

#[test]
fn test_missing_input_fails_without_output() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("translation file not found: src/translations/index.ts"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(!test.root().join("public").exists());
    assert!(!test.root().join(".temp").exists());
    Ok(())
}

#[test]
fn test_malformed_catalog_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/translations/index.ts",
        "export const locales = ['en-us'];\nexport const translations = [buildMessages()];",
    )?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("failed to load translation catalog"), "stderr: {}", err);
    assert!(err.contains("line 2"), "stderr: {}", err);
    assert!(!test.root().join("public").exists());
    Ok(())
}

#[test]
fn test_write_failure_keeps_earlier_files() -> Result<()> {
    let test = CliTest::with_catalog()?;
    // A non-empty directory where `fr.json` should be written.
    test.write_file("public/locales/fr.json/keep", "")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to write"));
    assert!(test.root().join("public/locales/en-us.json").is_file());
    assert!(!test.root().join("public/locales/jp.json").exists());
    assert!(!test.root().join(".temp").exists());
    Ok(())
}

#[test]
fn test_regeneration_is_byte_identical() -> Result<()> {
    let test = CliTest::with_catalog()?;

    test.generate_command().output()?;
    let first = test.read_file("public/locales/en-us.json")?;
    test.generate_command().output()?;
    let second = test.read_file("public/locales/en-us.json")?;

    assert_eq!(first, second);
    assert!(first.ends_with("]\n"));
    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(".locgenrc.json", r#"{ "defaultLocale": "" }"#)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid config file"));
    assert!(!test.root().join("public").exists());
    Ok(())
}

#[test]
fn test_work_dir_above_output_is_rejected() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.generate_command().args(["--temp-dir", "public"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("contains the output directory"));
    assert!(!test.root().join("public").exists());
    Ok(())
}

#[test]
fn test_existing_work_dir_contents_survive() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("scratch/notes.txt", "keep me")?;

    let output = test.generate_command().args(["--temp-dir", "scratch"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.list_dir("scratch")?, vec!["notes.txt"]);
    assert_eq!(test.read_file("scratch/notes.txt")?, "keep me");
    Ok(())
}

#[test]
fn test_config_paths_resolve_from_config_directory() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(".locgenrc.json", r#"{ "outputDir": "dist/locales" }"#)?;

    let output = test.command_in("src/translations").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.list_dir("dist/locales")?,
        vec!["en-us.json", "fr.json", "jp.json"]
    );
    assert!(!test.root().join("src/translations/dist").exists());
    assert!(!test.root().join(".temp").exists());
    assert!(!test.root().join("src/translations/.temp").exists());
    Ok(())
}

#[test]
fn test_dotenv_file_provides_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/catalog.json",
        r#"{ "locales": ["fr"], "translations": [{ "key": "HI", "fr": "Salut" }] }"#,
    )?;
    test.write_file(
        ".env",
        "TRANSLATIONS_INPUT_FILE=i18n/catalog.json\nLOCALES_OUTPUT_DIRECTORY=static/locales\n",
    )?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.list_dir("static/locales")?, vec!["fr.json"]);
    Ok(())
}

#[test]
fn test_environment_wins_over_dotenv_file() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(".env", "LOCALES_OUTPUT_DIRECTORY=from-dotenv\n")?;

    let output = test
        .generate_command()
        .env("LOCALES_OUTPUT_DIRECTORY", "from-env")
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("from-env/fr.json").exists());
    assert!(!test.root().join("from-dotenv").exists());
    Ok(())
}
