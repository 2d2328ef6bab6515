//! Data-driven matchup definitions and loaders.
//!
//! This crate reads calculator inputs from data files:
//! - Single matchups (TOML or RON, picked by file extension)
//! - Preset catalogs (a directory of named matchup files)
//!
//! All loaders use finish-core types directly with serde for RON/TOML
//! deserialization. Bundled presets live in `data/presets/`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, MatchupFormat, MatchupLoader, PresetCatalog};
