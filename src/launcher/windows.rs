use std::os::windows::process::CommandExt;
use std::path::Path;
use std::process::Command;

const DETACHED_PROCESS: u32 = 0x0000_0008;
const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

/// `start` runs executables, opens documents with their associated handler
/// and folders in Explorer. The empty string is the window title.
pub(super) fn platform_command(target: &Path, _meta: &std::fs::Metadata) -> Result<Command, String> {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    Ok(cmd)
}

pub(super) fn detach(cmd: &mut Command) {
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}
