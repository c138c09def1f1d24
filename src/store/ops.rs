use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{AliasStore, StoreFile};
use crate::alias::Alias;
use crate::error::{Error, Result};

impl AliasStore {
    /// `~/urun_data/config`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
        Ok(home.join("urun_data").join("config"))
    }

    /// Parse the store file at `path`. A missing file is an empty store;
    /// a file that exists but does not parse is never partially accepted.
    pub fn load(path: &Path) -> Result<Vec<Alias>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            // A dangling symlink also reads as NotFound; it is not an empty store.
            Err(e) if e.kind() == ErrorKind::NotFound && std::fs::symlink_metadata(path).is_err() => {
                tracing::debug!(path = %path.display(), "no alias store yet, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(Error::ConfigRead { path: path.to_path_buf(), source }),
        };
        let corrupt = |reason: String| Error::ConfigCorrupt { path: path.to_path_buf(), reason };

        let file: StoreFile = toml::from_str(&content).map_err(|e| corrupt(e.to_string()))?;

        for (i, alias) in file.aliases.iter().enumerate() {
            if alias.name.is_empty() {
                return Err(corrupt(format!("entry {} has an empty name", i + 1)));
            }
            if alias.target.as_os_str().is_empty() {
                return Err(corrupt(format!("alias '{}' has an empty target", alias.name)));
            }
            if file.aliases[..i].iter().any(|a| a.name == alias.name) {
                return Err(corrupt(format!("alias '{}' is defined twice", alias.name)));
            }
        }

        tracing::debug!(path = %path.display(), count = file.aliases.len(), "loaded alias store");
        Ok(file.aliases)
    }

    /// Write `aliases` to `path` as a complete snapshot.
    ///
    /// The content goes to a sibling temp file first and is renamed over the
    /// old file, so readers never see a half-written store.
    pub fn save(path: &Path, aliases: &[Alias]) -> Result<()> {
        let write_err = |source: std::io::Error| Error::ConfigWriteError { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let file = StoreFile { aliases: aliases.to_vec() };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| write_err(std::io::Error::other(e)))?;

        let temp_path = temp_path_for(path);
        if let Err(e) = write_then_rename(&temp_path, path, content.as_bytes()) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(write_err(e));
        }

        tracing::debug!(path = %path.display(), count = aliases.len(), "saved alias store");
        Ok(())
    }
}

fn write_then_rename(temp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut temp = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)?;
    temp.write_all(content)?;
    temp.sync_all()?;
    std::fs::rename(temp_path, path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
