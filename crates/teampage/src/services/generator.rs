//! Generator - One full run from dialogue to saved page

use std::path::PathBuf;

use tracing::info;

use crate::domain::TeamPageError;
use crate::ports::Prompter;
use crate::services::output::{write_page, OutputResolver};
use crate::services::render::render_team;
use crate::services::session::collect_team;

pub const DEFAULT_FILE_NAME: &str = "team.html";

/// Settings for a generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Page written to this path
    Saved(PathBuf),
    /// Lead name left blank; nothing rendered
    Aborted,
    /// Output collision not resolved; nothing written
    Abandoned,
}

/// Collect the team, render it, and save the page
pub fn generate_page<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &GeneratorConfig,
) -> Result<GenerateOutcome, TeamPageError> {
    let Some(team) = collect_team(prompter)? else {
        return Ok(GenerateOutcome::Aborted);
    };

    let page = render_team(&team)?;

    let resolver = OutputResolver::new(&config.output_dir);
    resolver.ensure_dir()?;

    let Some(path) = resolver.resolve(prompter, &config.file_name)? else {
        info!("No usable output file name; save abandoned");
        return Ok(GenerateOutcome::Abandoned);
    };

    write_page(&path, &page).map(GenerateOutcome::Saved)
}
