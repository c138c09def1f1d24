use anyhow::Result;
use std::path::Path;
use urun::Alias;

use super::open_store;

pub fn cmd_list(store: Option<&Path>) -> Result<()> {
    let store = open_store(store)?;
    if store.is_empty() {
        println!("No aliases yet. Add one with: urun add <name>");
        return Ok(());
    }
    let width = store.list().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, alias) in store.list() {
        println!("  {name:<width$}  -> {} ({})", alias.target.display(), kind_tag(alias));
    }
    Ok(())
}

fn kind_tag(alias: &Alias) -> String {
    alias.kind().map_or_else(|| "MISSING".to_string(), |k| k.to_string())
}
