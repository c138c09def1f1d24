use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::Command;

use crate::alias::is_executable;

/// Executables run directly; everything else goes to the desktop's opener.
pub(super) fn platform_command(target: &Path, meta: &std::fs::Metadata) -> Result<Command, String> {
    if is_executable(target, meta) {
        return Ok(Command::new(target));
    }
    let mut cmd = opener()?;
    cmd.arg(target);
    Ok(cmd)
}

/// Own process group, so the child is not taken down with the launcher's
/// terminal session.
pub(super) fn detach(cmd: &mut Command) {
    cmd.process_group(0);
}

#[cfg(target_os = "macos")]
fn opener() -> Result<Command, String> {
    Ok(Command::new("open"))
}

#[cfg(not(target_os = "macos"))]
fn opener() -> Result<Command, String> {
    if let Ok(path) = which::which("xdg-open") {
        return Ok(Command::new(path));
    }
    if let Ok(path) = which::which("gio") {
        let mut cmd = Command::new(path);
        cmd.arg("open");
        return Ok(cmd);
    }
    Err("no opener found on PATH (install xdg-utils or gio)".to_string())
}
