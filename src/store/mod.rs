mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::alias::{validate_name, Alias};
use crate::error::{Error, Result};

/// On-disk shape of the store: an array of `[[alias]]` tables, kept in the
/// order the aliases were added.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoreFile {
    #[serde(default, rename = "alias")]
    aliases: Vec<Alias>,
}

/// The user's alias collection, backed by a single TOML file.
///
/// Every mutation rewrites the whole file. If the write fails the in-memory
/// state is left as it was before the call.
#[derive(Debug)]
pub struct AliasStore {
    path: PathBuf,
    aliases: Vec<Alias>,
}

impl AliasStore {
    /// Open the store at `path`, loading it eagerly. A missing file is an
    /// empty store; nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let aliases = Self::load(&path)?;
        Ok(Self { path, aliases })
    }

    /// Open the store at its default location under the home directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True if no aliases are stored.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Look up an alias by its exact name.
    pub fn get(&self, name: &str) -> Result<&Alias> {
        self.aliases
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::AliasNotFound(name.to_string()))
    }

    /// `(name, alias)` pairs in insertion order. Reads the in-memory copy,
    /// so it can be iterated any number of times.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Alias)> + '_ {
        self.aliases.iter().map(|a| (a.name.as_str(), a))
    }

    /// Insert a new alias and persist. Never overwrites an existing name.
    pub fn add(&mut self, alias: Alias) -> Result<()> {
        alias.validate()?;
        if self.contains(&alias.name) {
            return Err(Error::AliasExists(alias.name));
        }
        tracing::debug!(name = %alias.name, target = %alias.target.display(), "adding alias");
        let mut next = self.aliases.clone();
        next.push(alias);
        self.commit(next)
    }

    /// Delete an alias and persist, returning what was removed.
    pub fn remove(&mut self, name: &str) -> Result<Alias> {
        let idx = self.index_of(name)?;
        let mut next = self.aliases.clone();
        let removed = next.remove(idx);
        tracing::debug!(name, "removing alias");
        self.commit(next)?;
        Ok(removed)
    }

    /// Give an alias a new name, keeping its position in the list.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        validate_name(new)?;
        let idx = self.index_of(old)?;
        if self.contains(new) {
            return Err(Error::AliasExists(new.to_string()));
        }
        let mut next = self.aliases.clone();
        next[idx].name = new.to_string();
        tracing::debug!(old, new, "renaming alias");
        self.commit(next)
    }

    /// Swap the record stored under `alias.name` for `alias`, returning the
    /// previous record.
    pub fn replace(&mut self, alias: Alias) -> Result<Alias> {
        alias.validate()?;
        let idx = self.index_of(&alias.name)?;
        let mut next = self.aliases.clone();
        let previous = std::mem::replace(&mut next[idx], alias);
        self.commit(next)?;
        Ok(previous)
    }

    /// Resolve what the user typed to a single alias: an exact name wins,
    /// otherwise `query` must be a substring of exactly one name.
    pub fn find(&self, query: &str) -> Result<&Alias> {
        if let Ok(alias) = self.get(query) {
            return Ok(alias);
        }
        let matches: Vec<&Alias> = self.aliases.iter().filter(|a| a.name.contains(query)).collect();
        match matches.as_slice() {
            [] => Err(Error::AliasNotFound(query.to_string())),
            [only] => Ok(only),
            _ => Err(Error::AmbiguousAlias {
                query: query.to_string(),
                matches: matches.iter().map(|a| a.name.clone()).collect(),
            }),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.aliases.iter().any(|a| a.name == name)
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.aliases
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| Error::AliasNotFound(name.to_string()))
    }

    fn commit(&mut self, next: Vec<Alias>) -> Result<()> {
        Self::save(&self.path, &next)?;
        self.aliases = next;
        Ok(())
    }
}
