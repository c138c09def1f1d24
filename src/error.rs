use std::path::PathBuf;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the alias store, resolver, picker and launcher can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `add` or `rename` hit a name that is already taken.
    #[error("alias '{0}' already exists")]
    AliasExists(String),

    /// No alias with this name is stored.
    #[error("alias '{0}' not found (run `urun list` to see available aliases)")]
    AliasNotFound(String),

    /// A partial name matched more than one alias.
    #[error("'{query}' matches several aliases: {}", .matches.join(", "))]
    AmbiguousAlias {
        /// What the user typed.
        query: String,
        /// Every alias name containing `query`, in list order.
        matches: Vec<String>,
    },

    /// The name cannot be used as an alias.
    #[error("invalid alias name '{name}': {reason}")]
    InvalidAlias {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The resolved path does not exist on disk.
    #[error("path '{}' does not exist", .0.display())]
    TargetNotFound(PathBuf),

    /// The user dismissed the file or folder picker.
    #[error("selection cancelled")]
    SelectionCancelled,

    /// No native dialog helper could be found.
    #[error("no file picker available: {0}")]
    PickerUnavailable(String),

    /// The operating system refused to start the target.
    #[error("failed to launch '{name}': {reason}")]
    LaunchFailed {
        /// Alias being launched.
        name: String,
        /// OS-reported error text, verbatim.
        reason: String,
    },

    /// The store file exists but could not be parsed.
    #[error(
        "alias store at {} is corrupt: {reason}. Inspect and fix the file by hand; it was left untouched",
        .path.display()
    )]
    ConfigCorrupt {
        /// Location of the store file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The store file exists but could not be read.
    #[error("failed to read alias store at {}: {source}", .path.display())]
    ConfigRead {
        /// Location of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the store back to disk failed.
    #[error("failed to write alias store at {}: {source}", .path.display())]
    ConfigWriteError {
        /// Location of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// `$HOME` (or the platform equivalent) is not known.
    #[error("could not determine home directory")]
    HomeDirUnavailable,
}

impl Error {
    /// Process exit code the command surface should report for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::AliasNotFound(_) | Self::AmbiguousAlias { .. } => 2,
            Self::AliasExists(_) => 3,
            Self::TargetNotFound(_) => 4,
            Self::LaunchFailed { .. } => 5,
            Self::ConfigCorrupt { .. } => 6,
            Self::ConfigWriteError { .. } => 7,
            Self::SelectionCancelled => 0,
            Self::InvalidAlias { .. }
            | Self::PickerUnavailable(_)
            | Self::ConfigRead { .. }
            | Self::HomeDirUnavailable => 1,
        }
    }
}
