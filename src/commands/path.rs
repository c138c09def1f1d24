use anyhow::Result;
use std::path::Path;
use urun::AliasStore;

pub fn cmd_path(store: Option<&Path>) -> Result<()> {
    let path = match store {
        Some(p) => p.to_path_buf(),
        None => AliasStore::default_path()?,
    };
    println!("{}", path.display());
    Ok(())
}
