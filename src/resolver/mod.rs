
use std::path::PathBuf;

use crate::alias::{default_working_directory, Alias, TargetKind};
use crate::error::{Error, Result};
use crate::picker::{PickKind, Picker, Selection};

/// Token that opens the file picker instead of naming a path.
pub const BROWSE_FILE: &str = "browsify";
/// Token that opens the folder picker instead of naming a path.
pub const BROWSE_FOLDER: &str = "browsefolder";

/// Raw user input for a target or working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    /// A literal path, possibly relative or starting with `~`.
    Literal(String),
    /// Ask the picker.
    Browse(PickKind),
}

impl PathInput {
    /// Recognise the picker tokens; anything else is a literal path.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            BROWSE_FILE => Self::Browse(PickKind::File),
            BROWSE_FOLDER => Self::Browse(PickKind::Folder),
            other => Self::Literal(other.to_string()),
        }
    }
}

/// A validated target, ready to become an [`Alias`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Absolute path that existed at resolution time.
    pub path: PathBuf,
    /// Advisory kind; only used for the default working directory.
    pub kind: TargetKind,
}

/// Turns what the user typed (or picked) into absolute, existing paths.
pub struct Resolver<'a> {
    picker: &'a dyn Picker,
    home: Option<PathBuf>,
}

impl<'a> Resolver<'a> {
    /// Resolver that expands `~` against the real home directory.
    pub fn new(picker: &'a dyn Picker) -> Self {
        Self { picker, home: dirs::home_dir() }
    }

    /// Override the directory `~` expands to.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Build a complete alias. A missing working directory defaults to the
    /// target's parent (or the target itself for a directory).
    pub fn resolve(&self, name: &str, target: &str, working_directory: Option<&str>) -> Result<Alias> {
        let resolved = self.resolve_target(target)?;
        let working_directory = match working_directory.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => self.resolve_existing(&PathInput::parse(raw))?,
            None => default_for(&resolved),
        };
        tracing::debug!(
            name,
            target = %resolved.path.display(),
            kind = %resolved.kind,
            cwd = %working_directory.display(),
            "resolved alias"
        );
        Alias::new(name, resolved.path, Some(working_directory))
    }

    /// Resolve and classify a target.
    pub fn resolve_target(&self, raw: &str) -> Result<ResolvedTarget> {
        let path = self.resolve_existing(&PathInput::parse(raw))?;
        let kind = TargetKind::of(&path).ok_or_else(|| Error::TargetNotFound(path.clone()))?;
        Ok(ResolvedTarget { path, kind })
    }

    fn resolve_existing(&self, input: &PathInput) -> Result<PathBuf> {
        let path = match input {
            PathInput::Literal(raw) => self.normalize(raw)?,
            PathInput::Browse(kind) => match self.picker.pick(*kind)? {
                Selection::Selected(path) => self.normalize(&path.to_string_lossy())?,
                Selection::Cancelled => return Err(Error::SelectionCancelled),
            },
        };
        if !path.exists() {
            return Err(Error::TargetNotFound(path));
        }
        Ok(path)
    }

    /// Strip surrounding quotes, expand `~`, and make the path absolute
    /// against the current directory. Does not touch the filesystem.
    pub fn normalize(&self, raw: &str) -> Result<PathBuf> {
        let trimmed = strip_quotes(raw.trim());
        if trimmed.is_empty() {
            return Err(Error::TargetNotFound(PathBuf::new()));
        }
        let expanded = self.expand_home(trimmed)?;
        std::path::absolute(&expanded).map_err(|_| Error::TargetNotFound(expanded))
    }

    fn expand_home(&self, raw: &str) -> Result<PathBuf> {
        let rest = if raw == "~" {
            Some("")
        } else {
            raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\"))
        };
        match rest {
            Some(rest) => {
                let home = self.home.as_deref().ok_or(Error::HomeDirUnavailable)?;
                Ok(if rest.is_empty() { home.to_path_buf() } else { home.join(rest) })
            }
            None => Ok(PathBuf::from(raw)),
        }
    }
}

fn default_for(target: &ResolvedTarget) -> PathBuf {
    match target.kind {
        TargetKind::Directory => target.path.clone(),
        TargetKind::Executable | TargetKind::Document => default_working_directory(&target.path),
    }
}

fn strip_quotes(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}
