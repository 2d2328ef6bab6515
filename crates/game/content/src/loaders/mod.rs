//! Content loaders for reading matchups from files.

pub mod matchup;
pub mod presets;

pub use matchup::{MatchupFormat, MatchupLoader};
pub use presets::PresetCatalog;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
