use anyhow::Result;
use std::path::Path;

use super::open_store;

pub fn cmd_rename(store: Option<&Path>, old: &str, new: &str) -> Result<()> {
    let mut store = open_store(store)?;
    store.rename(old, new)?;
    println!("Renamed '{old}' to '{new}'");
    Ok(())
}
