//! Matchup file loader.
//!
//! A matchup file names both competitors' stats and, optionally, everything
//! else the calculator takes. Omitted offsets are 0, omitted attempts are 3.
//!
//! ```toml
//! rerolls = 1
//! attempts = 3
//! penalties = [0, 2, 4]
//!
//! [attacker]
//! power = 10
//! technique = 9
//! agility = 8
//! strike = 7
//! submission = 6
//! grapple = 5
//!
//! [finish_bonuses]
//! grapple = 2
//!
//! [defender]
//! power = 12
//! technique = 8
//! agility = 8
//! strike = 6
//! submission = 10
//! grapple = 4
//! ```

use std::path::Path;

use finish_core::Matchup;

use crate::loaders::{LoadResult, read_file};

/// Supported matchup file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchupFormat {
    Toml,
    Ron,
}

impl MatchupFormat {
    /// Every supported format, in lookup order.
    pub const ALL: [MatchupFormat; 2] = [MatchupFormat::Toml, MatchupFormat::Ron];

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Ron => "ron",
        }
    }

    /// Format implied by a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| ext.eq_ignore_ascii_case(format.extension()))
    }
}

/// Loader for matchups from TOML or RON files.
pub struct MatchupLoader;

impl MatchupLoader {
    /// Load a matchup, picking the format from the file extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.toml` or `.ron` matchup file
    pub fn load(path: &Path) -> LoadResult<Matchup> {
        let format = MatchupFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported matchup file {}: expected a .toml or .ron extension",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let matchup = Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            path = %path.display(),
            attempts = matchup.attempts,
            rerolls = matchup.rerolls,
            "Loaded matchup"
        );

        Ok(matchup)
    }

    /// Parse matchup text in the given format.
    pub fn parse(content: &str, format: MatchupFormat) -> LoadResult<Matchup> {
        match format {
            MatchupFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse matchup TOML: {}", e)),
            MatchupFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse matchup RON: {}", e)),
        }
    }
}
