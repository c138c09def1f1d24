use anyhow::Result;
use std::path::Path;

use super::{open_store, prompt};

pub fn cmd_remove(store: Option<&Path>, name: &str, yes: bool) -> Result<()> {
    let mut store = open_store(store)?;
    let target = store.get(name)?.target.clone();

    if !yes && !prompt::confirm(&format!("Remove '{name}' ({})?", target.display()))? {
        eprintln!("Kept '{name}'.");
        return Ok(());
    }

    store.remove(name)?;
    println!("Removed '{name}'");
    Ok(())
}
