/// Finish rule constants and tunable input limits.
///
/// The rule constants are fixed by the tabletop game and used directly by the
/// engine. The input limits only govern [`crate::Matchup::sanitize`] and
/// [`crate::Matchup::validate`]; the engine itself accepts any integers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesConfig {
    /// Lowest raw stat a competitor may have.
    pub stat_min: i32,
    /// Highest raw stat a competitor may have.
    pub stat_max: i32,
    /// Fewest breakout attempts a defender may be given.
    pub min_attempts: u32,
    /// Most breakout attempts a defender may be given.
    pub max_attempts: u32,
}

impl RulesConfig {
    // ===== game rule constants =====
    /// Faces on the finish die, one per stat.
    pub const DIE_FACES: usize = 6;
    /// Ordered pairs of faces enumerated for a best-of-two reroll.
    pub const REROLL_PAIRS: usize = Self::DIE_FACES * Self::DIE_FACES;
    /// Highest Crowd Meter level.
    pub const CROWD_METER_MAX: u8 = 5;
    /// Finish value at or above which a finish cannot be broken (CM > 0 only).
    pub const AUTO_SUCCESS_THRESHOLD: i32 = 11;
    /// Defender stat that always breaks out at CM 0.
    pub const CM0_BREAKOUT_STAT: i32 = 10;

    // ===== input defaults =====
    pub const DEFAULT_STAT_MIN: i32 = 1;
    pub const DEFAULT_STAT_MAX: i32 = 30;
    pub const DEFAULT_MIN_ATTEMPTS: u32 = 1;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
    pub const DEFAULT_ATTEMPTS: u32 = 3;

    pub const fn new() -> Self {
        Self {
            stat_min: Self::DEFAULT_STAT_MIN,
            stat_max: Self::DEFAULT_STAT_MAX,
            min_attempts: Self::DEFAULT_MIN_ATTEMPTS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Clamp a raw stat into the allowed range.
    pub fn clamp_stat(&self, value: i32) -> i32 {
        value.clamp(self.stat_min, self.stat_max)
    }

    /// Clamp an attempt count into the allowed range.
    pub fn clamp_attempts(&self, attempts: u32) -> u32 {
        attempts.clamp(self.min_attempts, self.max_attempts)
    }

    pub fn stat_in_range(&self, value: i32) -> bool {
        (self.stat_min..=self.stat_max).contains(&value)
    }

    pub fn attempts_in_range(&self, attempts: u32) -> bool {
        (self.min_attempts..=self.max_attempts).contains(&attempts)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
