use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Words the command line claims for itself; an alias with one of these
/// names could never be launched by typing it.
pub const RESERVED_NAMES: &[&str] = &["add", "remove", "list", "help", "rename", "update", "path"];

/// A named launch target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alias {
    /// Case-sensitive key, unique within a store.
    pub name: String,
    /// Absolute path to a file, executable or directory.
    pub target: PathBuf,
    /// Directory the launched process starts in. `None` means the default
    /// derived from `target` (see [`default_working_directory`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,
}

impl Alias {
    /// Build an alias, rejecting names the command line cannot address and
    /// empty targets.
    pub fn new(
        name: impl Into<String>,
        target: PathBuf,
        working_directory: Option<PathBuf>,
    ) -> Result<Self> {
        let alias = Self { name: name.into(), target, working_directory };
        alias.validate()?;
        Ok(alias)
    }

    /// Check the invariants every stored record must hold. Fields are public,
    /// so the store re-checks before writing.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.target.as_os_str().is_empty() {
            return Err(Error::TargetNotFound(PathBuf::new()));
        }
        Ok(())
    }

    /// The directory the target should be started in.
    pub fn effective_working_directory(&self) -> PathBuf {
        self.working_directory
            .clone()
            .unwrap_or_else(|| default_working_directory(&self.target))
    }

    /// Kind of the target as it is on disk right now.
    pub fn kind(&self) -> Option<TargetKind> {
        TargetKind::of(&self.target)
    }
}

/// Advisory classification of a target. Launching treats all kinds alike;
/// the kind only decides the default working directory and the `list` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A regular file the OS can execute.
    Executable,
    /// Any other regular file, opened by its associated handler.
    Document,
    /// A folder, opened in the file manager.
    Directory,
}

impl TargetKind {
    /// Classify `path`, or `None` if it does not exist.
    pub fn of(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        if meta.is_dir() {
            Some(Self::Directory)
        } else if is_executable(path, &meta) {
            Some(Self::Executable)
        } else {
            Some(Self::Document)
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Executable => write!(f, "exe"),
            Self::Document => write!(f, "file"),
            Self::Directory => write!(f, "folder"),
        }
    }
}

#[cfg(unix)]
pub(crate) fn is_executable(_path: &Path, meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
pub(crate) fn is_executable(path: &Path, meta: &std::fs::Metadata) -> bool {
    const EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com", "ps1"];
    meta.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// A directory target starts in itself; anything else in its parent.
pub fn default_working_directory(target: &Path) -> PathBuf {
    if target.is_dir() {
        return target.to_path_buf();
    }
    target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| target.to_path_buf(), Path::to_path_buf)
}

/// Reject names that are empty, contain whitespace or path separators, or
/// shadow a command word.
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name must not be empty")
    } else if name.chars().any(char::is_whitespace) {
        Some("name must not contain whitespace")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name.starts_with('-') {
        Some("name must not start with '-'")
    } else if RESERVED_NAMES.contains(&name) {
        Some("name is a urun command")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(Error::InvalidAlias { name: name.to_string(), reason }),
        None => Ok(()),
    }
}
