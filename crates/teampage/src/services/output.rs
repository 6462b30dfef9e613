//! Output Path Resolver & Writer
//!
//! Picks the file the page is saved to. A collision with an existing file
//! is settled by the user: overwrite it, or name another file, which is
//! checked again. A blank or unusable alternate name abandons the save.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::TeamPageError;
use crate::ports::Prompter;

pub const ASK_ALTERNATE: &str = "Enter new html file name:";

fn ask_overwrite(path: &Path) -> String {
    format!("{} already exists. Overwrite?", path.display())
}

/// States of output path resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveState {
    /// Check whether the candidate path is free
    CheckExists(PathBuf),
    /// Candidate exists; ask whether to overwrite it
    Overwrite(PathBuf),
    /// Ask for another file name
    AskAlternate,
    /// Terminal: write here
    Ready(PathBuf),
    /// Terminal: give up without writing
    Abandoned,
}

impl ResolveState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolveState::Ready(_) | ResolveState::Abandoned)
    }
}

/// Resolves the output path inside one output directory
#[derive(Debug, Clone)]
pub struct OutputResolver {
    output_dir: PathBuf,
}

impl OutputResolver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_dir(&self) -> Result<(), TeamPageError> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| TeamPageError::io(&self.output_dir, e))
    }

    /// Resolve starting from `file_name`; `None` means the save was abandoned
    pub fn resolve<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        file_name: &str,
    ) -> Result<Option<PathBuf>, TeamPageError> {
        let mut state = ResolveState::CheckExists(self.output_dir.join(file_name));

        while !state.is_terminal() {
            state = self.step(state, prompter)?;
        }

        match state {
            ResolveState::Ready(path) => Ok(Some(path)),
            _ => Ok(None),
        }
    }

    /// Perform one transition; terminal states are returned unchanged
    pub fn step<P: Prompter + ?Sized>(
        &self,
        state: ResolveState,
        prompter: &mut P,
    ) -> Result<ResolveState, TeamPageError> {
        let next = match state {
            ResolveState::CheckExists(path) => {
                if path.exists() {
                    ResolveState::Overwrite(path)
                } else {
                    ResolveState::Ready(path)
                }
            }
            ResolveState::Overwrite(path) => {
                if prompter.confirm(&ask_overwrite(&path))? {
                    ResolveState::Ready(path)
                } else {
                    ResolveState::AskAlternate
                }
            }
            ResolveState::AskAlternate => {
                let answer = prompter.input(ASK_ALTERNATE)?;
                match html_file_name(&answer) {
                    Some(name) => ResolveState::CheckExists(self.output_dir.join(name)),
                    None => ResolveState::Abandoned,
                }
            }
            terminal => terminal,
        };

        debug!(state = ?next, "Output resolution step");
        Ok(next)
    }
}

/// Reduce a user-supplied name to `<base>.html`
///
/// Directories and any extension are dropped and the base name is trimmed.
/// Returns `None` when nothing usable is left.
pub fn html_file_name(input: &str) -> Option<String> {
    let stem = Path::new(input).file_stem()?.to_str()?.trim();
    if stem.is_empty() {
        return None;
    }
    Some(format!("{}.html", stem))
}

/// Write the rendered page to `path`
pub fn write_page(path: &Path, html: &str) -> Result<PathBuf, TeamPageError> {
    fs::write(path, html).map_err(|e| TeamPageError::io(path, e))?;
    info!(path = %path.display(), bytes = html.len(), "Team page written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Answer, ScriptedPrompter};

    #[test]
    fn test_html_file_name() {
        assert_eq!(html_file_name(" report "), Some("report.html".to_string()));
        assert_eq!(html_file_name("report.html"), Some("report.html".to_string()));
        assert_eq!(html_file_name("notes.txt"), Some("notes.html".to_string()));
        assert_eq!(html_file_name("../etc/page"), Some("page.html".to_string()));
        assert_eq!(html_file_name("a.b.htm"), Some("a.b.html".to_string()));
        assert_eq!(html_file_name(""), None);
        assert_eq!(html_file_name("   "), None);
        assert_eq!(html_file_name(".."), None);
    }

    #[test]
    fn test_check_exists_free_path_is_ready() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = OutputResolver::new(dir.path());
        let mut p = ScriptedPrompter::default();

        let path = dir.path().join("team.html");
        let next = resolver
            .step(ResolveState::CheckExists(path.clone()), &mut p)
            .unwrap();
        assert_eq!(next, ResolveState::Ready(path));
        assert!(p.asked().is_empty());
    }

    #[test]
    fn test_check_exists_collision_asks_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team.html");
        fs::write(&path, "old").unwrap();
        let resolver = OutputResolver::new(dir.path());
        let mut p = ScriptedPrompter::default();

        let next = resolver
            .step(ResolveState::CheckExists(path.clone()), &mut p)
            .unwrap();
        assert_eq!(next, ResolveState::Overwrite(path));
    }

    #[test]
    fn test_overwrite_yes_and_no() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team.html");
        let resolver = OutputResolver::new(dir.path());

        let mut yes = ScriptedPrompter::new([Answer::Confirm(true)]);
        let next = resolver
            .step(ResolveState::Overwrite(path.clone()), &mut yes)
            .unwrap();
        assert_eq!(next, ResolveState::Ready(path.clone()));
        assert_eq!(yes.asked()[0], ask_overwrite(&path));

        let mut no = ScriptedPrompter::new([Answer::Confirm(false)]);
        let next = resolver
            .step(ResolveState::Overwrite(path), &mut no)
            .unwrap();
        assert_eq!(next, ResolveState::AskAlternate);
    }

    #[test]
    fn test_alternate_name_rechecks() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = OutputResolver::new(dir.path());

        let mut p = ScriptedPrompter::new([Answer::text(" report ")]);
        let next = resolver.step(ResolveState::AskAlternate, &mut p).unwrap();
        assert_eq!(
            next,
            ResolveState::CheckExists(dir.path().join("report.html"))
        );

        let mut blank = ScriptedPrompter::new([Answer::text("")]);
        let next = resolver
            .step(ResolveState::AskAlternate, &mut blank)
            .unwrap();
        assert_eq!(next, ResolveState::Abandoned);
    }

    #[test]
    fn test_terminal_states_unchanged() {
        let resolver = OutputResolver::new("unused");
        let mut p = ScriptedPrompter::default();
        assert_eq!(
            resolver.step(ResolveState::Abandoned, &mut p).unwrap(),
            ResolveState::Abandoned
        );
        let ready = ResolveState::Ready(PathBuf::from("x.html"));
        assert_eq!(resolver.step(ready.clone(), &mut p).unwrap(), ready);
    }

    #[test]
    fn test_resolve_loops_until_free_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("team.html"), "old").unwrap();
        fs::write(dir.path().join("report.html"), "old").unwrap();
        let resolver = OutputResolver::new(dir.path());

        let mut p = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::text("report"),
            Answer::Confirm(false),
            Answer::text("final.html"),
        ]);
        let path = resolver.resolve(&mut p, "team.html").unwrap();
        assert_eq!(path, Some(dir.path().join("final.html")));
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_ensure_dir_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("output");
        let resolver = OutputResolver::new(&out);
        resolver.ensure_dir().unwrap();
        assert!(out.is_dir());

        let path = write_page(&out.join("team.html"), "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("team.html");
        assert!(matches!(
            write_page(&missing, "x"),
            Err(TeamPageError::Io { .. })
        ));
    }
}
