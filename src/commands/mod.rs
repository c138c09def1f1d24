pub mod add;
pub mod launch;
pub mod list;
pub mod path;
pub mod remove;
pub mod rename;
pub mod update;

mod prompt;

use anyhow::{Context, Result};
use std::path::Path;
use urun::AliasStore;

/// Open the store at `--store` if given, else at the default location.
fn open_store(path: Option<&Path>) -> Result<AliasStore> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => AliasStore::default_path()?,
    };
    AliasStore::open(&path).with_context(|| format!("Failed to open alias store at {}", path.display()))
}
