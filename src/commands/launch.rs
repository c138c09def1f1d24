use anyhow::{bail, Result};
use std::path::Path;
use urun::launcher::launch_alias;
use urun::{Error, SystemLauncher};

use super::open_store;

pub fn cmd_launch(store: Option<&Path>, args: &[String]) -> Result<()> {
    let [query] = args else {
        bail!("urun launches a single alias and does not pass arguments to it");
    };
    let store = open_store(store)?;

    match launch_alias(&store, &SystemLauncher, query) {
        Ok(alias) => {
            eprintln!("Launched '{}'", alias.name);
            Ok(())
        }
        Err(Error::AmbiguousAlias { query, matches }) => {
            eprintln!("Several aliases match '{query}':");
            for name in &matches {
                if let Ok(alias) = store.get(name) {
                    eprintln!("  - {name} ({})", alias.target.display());
                }
            }
            Err(Error::AmbiguousAlias { query, matches }.into())
        }
        Err(e) => Err(e.into()),
    }
}
