use std::process::{Command, Stdio};

use super::{selection_from_output, PickKind, Selection};
use crate::error::{Error, Result};

/// Run the helper command and read the chosen path from its stdout. Helpers
/// exit non-zero when the user cancels.
fn run_helper(mut cmd: Command) -> Result<Selection> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(program = %program, "opening picker dialog");
    let output = cmd
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| Error::PickerUnavailable(format!("failed to run {program}: {e}")))?;

    if !output.status.success() {
        tracing::debug!(program = %program, code = ?output.status.code(), "picker dismissed");
        return Ok(Selection::Cancelled);
    }
    Ok(selection_from_output(&output.stdout))
}

// ──────────────────────────── macOS ────────────────────────────

#[cfg(target_os = "macos")]
pub(super) fn run(kind: PickKind) -> Result<Selection> {
    let script = match kind {
        PickKind::File => r#"POSIX path of (choose file with prompt "Select File")"#,
        PickKind::Folder => r#"POSIX path of (choose folder with prompt "Select Folder")"#,
    };
    let mut cmd = Command::new("osascript");
    cmd.args(["-e", script]);
    run_helper(cmd)
}

// ──────────────────────────── Windows ────────────────────────────

#[cfg(target_os = "windows")]
pub(super) fn run(kind: PickKind) -> Result<Selection> {
    let script = match kind {
        PickKind::File => {
            "Add-Type -AssemblyName System.Windows.Forms; \
             $d = New-Object System.Windows.Forms.OpenFileDialog; \
             $d.Title = 'Select File'; $d.Filter = 'All files (*.*)|*.*|Executable files (*.exe)|*.exe'; \
             if ($d.ShowDialog() -eq 'OK') { $d.FileName }"
        }
        PickKind::Folder => {
            "Add-Type -AssemblyName System.Windows.Forms; \
             $d = New-Object System.Windows.Forms.FolderBrowserDialog; \
             $d.Description = 'Select Folder'; \
             if ($d.ShowDialog() -eq 'OK') { $d.SelectedPath }"
        }
    };
    let mut cmd = Command::new("powershell");
    cmd.args(["-NoProfile", "-STA", "-Command", script]);
    run_helper(cmd)
}

// ──────────────────────────── Linux / other unix ────────────────────────────

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub(super) fn run(kind: PickKind) -> Result<Selection> {
    if which::which("zenity").is_ok() {
        let mut cmd = Command::new("zenity");
        cmd.arg("--file-selection");
        match kind {
            PickKind::File => cmd.args(["--title", "Select File"]),
            PickKind::Folder => cmd.args(["--directory", "--title", "Select Folder"]),
        };
        return run_helper(cmd);
    }
    if which::which("kdialog").is_ok() {
        let mut cmd = Command::new("kdialog");
        match kind {
            PickKind::File => cmd.args(["--getopenfilename", "."]),
            PickKind::Folder => cmd.args(["--getexistingdirectory", "."]),
        };
        return run_helper(cmd);
    }
    Err(Error::PickerUnavailable(
        "install zenity or kdialog, or type the path instead".to_string(),
    ))
}
