use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod generate;
mod init;

const BIN_NAME: &str = "locgen";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project laid out like the default catalog location.
    pub fn with_catalog() -> Result<Self> {
        let test = Self::new()?;
        test.write_catalog()?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write `src/translations/index.ts` with two message modules.
    pub fn write_catalog(&self) -> Result<()> {
        self.write_file(
            "src/types/ITranslations.ts",
            r#"export type ITranslations<TLocales extends string> = {
    key: string;
} & {
    [locale in TLocales]: string;
};"#,
        )?;
        self.write_file(
            "src/translations/messages/goodbye.ts",
            r#"import { Locales } from ".."
import { ITranslations } from "../../types/ITranslations"

export const GoodbyeMessage: ITranslations<Locales> = {
    key: 'GOODBYE',
    'en-us': 'Goodbye',
    fr: 'Au revoir',
    jp: 'さようなら',
}"#,
        )?;
        self.write_file(
            "src/translations/messages/welcome.ts",
            r#"import { Locales } from ".."
import { ITranslations } from "../../types/ITranslations"

export const WelcomeMessage: ITranslations<Locales> = {
    key: 'WELCOME',
    'en-us': 'Welcome',
    fr: 'Bienvenue',
    jp: 'ようこそ',
}"#,
        )?;
        self.write_file(
            "src/translations/index.ts",
            r#"import { ITranslations } from "../types/ITranslations";
import { GoodbyeMessage } from "./messages/goodbye";
import { WelcomeMessage } from "./messages/welcome";

export const locales = ['en-us', 'fr', 'jp'] as const;
export type Locales = typeof locales[number];

export const translations: ITranslations<Locales>[] = [
    GoodbyeMessage,
    WelcomeMessage
];"#,
        )
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        self.command_in("")
    }

    /// Command running from `dir`, relative to the project root.
    pub fn command_in(&self, dir: &str) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(self.project_dir.join(dir));
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Sorted file names directly inside `dir`.
    pub fn list_dir(&self, dir: &str) -> Result<Vec<String>> {
        let mut names = fs::read_dir(self.project_dir.join(dir))?
            .map(|entry| Ok(entry?.file_name().to_string_lossy().to_string()))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}
