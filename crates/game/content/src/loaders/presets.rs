//! Preset catalog: a directory of named matchup files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use finish_core::Matchup;

use crate::loaders::{LoadResult, MatchupFormat, MatchupLoader};

/// Named matchups stored as files in one directory.
///
/// # Directory Structure
///
/// ```text
/// presets/
/// ├── mirror_match.toml
/// ├── heavyweight.toml
/// └── underdog.ron
/// ```
///
/// A preset's name is its file stem. Files with other extensions are ignored.
/// When a TOML and a RON file share a stem, the TOML file wins.
pub struct PresetCatalog {
    dir: PathBuf,
}

impl PresetCatalog {
    /// Creates a catalog rooted at `dir`. The directory is not read until used.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this catalog reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of every preset, sorted and deduplicated.
    ///
    /// A missing directory yields an empty list.
    pub fn names(&self) -> LoadResult<Vec<String>> {
        if !self.dir.exists() {
            tracing::debug!(dir = %self.dir.display(), "Preset directory does not exist");
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read preset directory {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || MatchupFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Path of the file backing preset `name`.
    pub fn path_for(&self, name: &str) -> LoadResult<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            anyhow::bail!("Invalid preset name: {:?}", name);
        }

        MatchupFormat::ALL
            .into_iter()
            .map(|format| self.dir.join(format!("{}.{}", name, format.extension())))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Preset {:?} not found in {}",
                    name,
                    self.dir.display()
                )
            })
    }

    /// Load preset `name`.
    pub fn load(&self, name: &str) -> LoadResult<Matchup> {
        let path = self.path_for(name)?;
        tracing::info!(preset = name, path = %path.display(), "Loading preset");
        MatchupLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_paths() {
        let catalog = PresetCatalog::new("/tmp/presets");
        assert_eq!(catalog.dir(), Path::new("/tmp/presets"));
    }

    #[test]
    fn rejects_path_like_names() {
        let catalog = PresetCatalog::new("/tmp/presets");
        assert!(catalog.path_for("../secret").is_err());
        assert!(catalog.path_for(".hidden").is_err());
        assert!(catalog.path_for("").is_err());
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let catalog = PresetCatalog::new("/nonexistent/finish/presets");
        assert!(catalog.names().unwrap().is_empty());
    }
}
