pub mod generate;
pub mod init;

use std::path::PathBuf;

use super::exit_status::ExitStatus;
use crate::core::PipelineSummary;
use crate::error::PipelineError;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

/// Settings a generation run used, and how it ended.
#[derive(Debug)]
pub struct GenerateSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub work_dir: PathBuf,
    /// Configuration file that was applied, if any.
    pub config_path: Option<PathBuf>,
    pub outcome: Result<PipelineSummary, PipelineError>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running locgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Generate(GenerateSummary { outcome: Err(_), .. }) => {
                ExitStatus::Failure
            }
            CommandSummary::Generate(_) | CommandSummary::Init(_) => ExitStatus::Success,
        }
    }
}
