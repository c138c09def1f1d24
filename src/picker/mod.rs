mod dialog;

use std::path::PathBuf;

use crate::error::Result;

/// Outcome of an interactive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user chose this path.
    Selected(PathBuf),
    /// The dialog was dismissed.
    Cancelled,
}

/// Which kind of dialog to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    /// Any file.
    File,
    /// A directory.
    Folder,
}

/// Something that can ask the user for a path. Blocks until the user
/// answers; callers never run two picks at once.
pub trait Picker {
    /// Ask for a file.
    fn pick_file(&self) -> Result<Selection>;
    /// Ask for a folder.
    fn pick_folder(&self) -> Result<Selection>;

    /// Dispatch on `kind`.
    fn pick(&self, kind: PickKind) -> Result<Selection> {
        match kind {
            PickKind::File => self.pick_file(),
            PickKind::Folder => self.pick_folder(),
        }
    }
}

/// The platform's native dialog, driven through a helper program
/// (`osascript`, `zenity`/`kdialog`, or PowerShell).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPicker;

impl Picker for SystemPicker {
    fn pick_file(&self) -> Result<Selection> {
        dialog::run(PickKind::File)
    }

    fn pick_folder(&self) -> Result<Selection> {
        dialog::run(PickKind::Folder)
    }
}

/// Turn a helper's stdout into a [`Selection`]: blank output means the user
/// dismissed the dialog.
pub(crate) fn selection_from_output(stdout: &[u8]) -> Selection {
    let text = String::from_utf8_lossy(stdout);
    let trimmed = text.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() {
        Selection::Cancelled
    } else {
        Selection::Selected(PathBuf::from(trimmed))
    }
}
