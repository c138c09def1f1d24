#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;


use std::process::Stdio;

use crate::alias::Alias;
use crate::error::{Error, Result};
use crate::store::AliasStore;

#[cfg(unix)]
use unix::{detach, platform_command};

#[cfg(windows)]
use windows::{detach, platform_command};

/// Starts alias targets.
pub trait Launcher {
    /// Start `alias` and return without waiting for it.
    fn launch(&self, alias: &Alias) -> Result<()>;
}

/// Hands targets to the operating system the way a file manager would on a
/// double click. The spawned process is detached and never waited on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, alias: &Alias) -> Result<()> {
        let failed = |reason: String| Error::LaunchFailed { name: alias.name.clone(), reason };

        // The target may have moved since it was added.
        let meta = std::fs::metadata(&alias.target).map_err(|e| failed(e.to_string()))?;

        let cwd = alias.effective_working_directory();
        let mut cmd = platform_command(&alias.target, &meta).map_err(failed)?;
        cmd.current_dir(&cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut cmd);

        tracing::info!(
            name = %alias.name,
            program = %cmd.get_program().to_string_lossy(),
            cwd = %cwd.display(),
            "launching"
        );
        let child = cmd.spawn().map_err(|e| failed(e.to_string()))?;
        tracing::debug!(pid = child.id(), "spawned");
        Ok(())
    }
}

/// Look up `query` (exact name, or a unique partial match) and launch it.
/// The store is never modified, whatever the outcome.
pub fn launch_alias<'s>(store: &'s AliasStore, launcher: &dyn Launcher, query: &str) -> Result<&'s Alias> {
    let alias = store.find(query)?;
    launcher.launch(alias)?;
    Ok(alias)
}

#[cfg(not(any(unix, windows)))]
fn platform_command(_target: &std::path::Path, _meta: &std::fs::Metadata) -> std::result::Result<std::process::Command, String> {
    Err("launching is not supported on this platform".to_string())
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut std::process::Command) {}
