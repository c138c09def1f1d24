use anyhow::Result;
use std::path::Path;
use urun::alias::validate_name;
use urun::resolver::{PathInput, BROWSE_FILE, BROWSE_FOLDER};
use urun::{Error, Resolver, SystemPicker};

use super::{open_store, prompt};

pub fn cmd_add(store: Option<&Path>, name: &str, target: Option<String>, cwd: Option<String>) -> Result<()> {
    validate_name(name)?;
    let mut store = open_store(store)?;
    // Fail before asking anything if the name is taken.
    if store.get(name).is_ok() {
        return Err(Error::AliasExists(name.to_string()).into());
    }

    let (target, cwd) = match target {
        Some(target) => (target, cwd),
        None => {
            let target = prompt::ask(&format!(
                "Target for '{name}' (path, `{BROWSE_FILE}` or `{BROWSE_FOLDER}`): "
            ))?;
            let cwd = match cwd {
                Some(cwd) => Some(cwd),
                None => prompt::ask_optional("Working directory (blank for default): ")?,
            };
            (target, cwd)
        }
    };

    if matches!(PathInput::parse(&target), PathInput::Browse(_)) {
        eprintln!("Select the target for '{name}' in the pop-up window…");
    }

    let picker = SystemPicker;
    let alias = match Resolver::new(&picker).resolve(name, &target, cwd.as_deref()) {
        Err(Error::SelectionCancelled) => {
            eprintln!("add aborted");
            return Ok(());
        }
        other => other?,
    };

    let summary = format!(
        "Added '{}' -> {} (starts in {})",
        alias.name,
        alias.target.display(),
        alias.effective_working_directory().display()
    );
    store.add(alias)?;
    println!("{summary}");
    Ok(())
}
