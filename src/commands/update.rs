use anyhow::Result;
use std::path::Path;
use urun::resolver::{BROWSE_FILE, BROWSE_FOLDER};
use urun::{Alias, Error, Resolver, SystemPicker};

use super::{open_store, prompt};

pub fn cmd_update(store: Option<&Path>, name: &str, target: Option<String>, cwd: Option<String>) -> Result<()> {
    let mut store = open_store(store)?;
    let current = store.get(name)?.clone();

    let target = match target {
        Some(t) => t,
        None => prompt::ask_optional(&format!(
            "New target for '{name}' [{}] (path, `{BROWSE_FILE}` or `{BROWSE_FOLDER}`): ",
            current.target.display()
        ))?
        .unwrap_or_else(|| current.target.display().to_string()),
    };

    let picker = SystemPicker;
    let alias = match Resolver::new(&picker).resolve(name, &target, cwd.as_deref()) {
        Err(Error::SelectionCancelled) => {
            eprintln!("update aborted");
            return Ok(());
        }
        other => other?,
    };
    let alias = keep_working_directory(alias, &current, cwd.is_some());

    let previous = store.replace(alias)?;
    let updated = store.get(name)?;
    println!(
        "Updated '{name}': {} -> {}",
        previous.target.display(),
        updated.target.display()
    );
    Ok(())
}

/// Without `--cwd`, a record whose target is unchanged keeps its stored
/// working directory instead of the resolver's default.
fn keep_working_directory(mut alias: Alias, current: &Alias, cwd_given: bool) -> Alias {
    if !cwd_given && alias.target == current.target {
        alias.working_directory.clone_from(&current.working_directory);
    }
    alias
}
