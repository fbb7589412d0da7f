//! Game configuration.
//!
//! `GameConfig` fixes the rules the tracker enforces:
//! - How many attempts a game allows before it restarts
//! - How many bottles an arrangement holds
//! - Which bottle values are legal
//! - Whether an arrangement must use each value at most once
//!
//! `GameConfig::default()` is the standard five-bottle game.

use serde::{Deserialize, Serialize};

/// Attempts allowed per game before the automatic restart.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 5;

/// Number of bottles in an arrangement.
pub const DEFAULT_ARRANGEMENT_LEN: usize = 5;

/// Lowest legal bottle value.
pub const DEFAULT_MIN_BOTTLE: u8 = 1;

/// Highest legal bottle value.
pub const DEFAULT_MAX_BOTTLE: u8 = 5;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use bottle_game::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_max_attempts(3)
///     .with_distinct_values();
///
/// assert_eq!(config.max_attempts, 3);
/// assert_eq!(config.arrangement_len, 5);
/// assert!(config.require_distinct);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Attempts per game. Reaching this count restarts the game.
    pub max_attempts: u8,

    /// Exact number of values in every arrangement.
    pub arrangement_len: usize,

    /// Lowest legal bottle value (inclusive).
    pub min_bottle: u8,

    /// Highest legal bottle value (inclusive).
    pub max_bottle: u8,

    /// Reject arrangements that repeat a value.
    pub require_distinct: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            arrangement_len: DEFAULT_ARRANGEMENT_LEN,
            min_bottle: DEFAULT_MIN_BOTTLE,
            max_bottle: DEFAULT_MAX_BOTTLE,
            require_distinct: false,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt ceiling.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u8) -> Self {
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = max_attempts;
        self
    }

    /// Set the arrangement length.
    #[must_use]
    pub fn with_arrangement_len(mut self, len: usize) -> Self {
        assert!(len > 0, "Arrangement must hold at least 1 bottle");
        self.arrangement_len = len;
        self
    }

    /// Set the inclusive range of legal bottle values.
    #[must_use]
    pub fn with_bottle_range(mut self, min: u8, max: u8) -> Self {
        assert!(min <= max, "Bottle range is empty");
        self.min_bottle = min;
        self.max_bottle = max;
        self
    }

    /// Require every value in an arrangement to be different.
    #[must_use]
    pub fn with_distinct_values(mut self) -> Self {
        self.require_distinct = true;
        self
    }

    /// Number of distinct legal bottle values.
    #[must_use]
    pub fn bottle_values(&self) -> usize {
        usize::from(self.max_bottle.saturating_sub(self.min_bottle)) + 1
    }

    /// Check if a single value is a legal bottle.
    #[must_use]
    pub fn is_legal_bottle(&self, value: u8) -> bool {
        (self.min_bottle..=self.max_bottle).contains(&value)
    }

    /// Panic if the configuration cannot describe a playable game.
    ///
    /// Builder methods check their own arguments; this catches configs
    /// assembled by hand or deserialized.
    pub fn validate(&self) {
        assert!(self.max_attempts > 0, "Must allow at least 1 attempt");
        assert!(self.arrangement_len > 0, "Arrangement must hold at least 1 bottle");
        assert!(self.min_bottle <= self.max_bottle, "Bottle range is empty");
        if self.require_distinct {
            assert!(
                self.arrangement_len <= self.bottle_values(),
                "Distinct arrangement needs at least as many bottle values as slots"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.arrangement_len, 5);
        assert_eq!(config.min_bottle, 1);
        assert_eq!(config.max_bottle, 5);
        assert!(!config.require_distinct);
        assert_eq!(config.bottle_values(), 5);
        config.validate();
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_max_attempts(3)
            .with_arrangement_len(4)
            .with_bottle_range(0, 9)
            .with_distinct_values();

        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.arrangement_len, 4);
        assert_eq!(config.bottle_values(), 10);
        assert!(config.require_distinct);
        config.validate();
    }

    #[test]
    fn test_is_legal_bottle() {
        let config = GameConfig::default();

        assert!(!config.is_legal_bottle(0));
        assert!(config.is_legal_bottle(1));
        assert!(config.is_legal_bottle(5));
        assert!(!config.is_legal_bottle(6));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: GameConfig = serde_json::from_str(r#"{"max_attempts": 7}"#).unwrap();

        assert_eq!(config.max_attempts, 7);
        assert_eq!(config.arrangement_len, 5);
        assert_eq!(config.max_bottle, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_distinct_values();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must allow at least 1 attempt")]
    fn test_zero_attempts() {
        let _ = GameConfig::new().with_max_attempts(0);
    }

    #[test]
    #[should_panic(expected = "Bottle range is empty")]
    fn test_inverted_range() {
        let _ = GameConfig::new().with_bottle_range(5, 1);
    }

    #[test]
    #[should_panic(expected = "Distinct arrangement needs")]
    fn test_distinct_too_few_values() {
        GameConfig::new()
            .with_bottle_range(1, 3)
            .with_distinct_values()
            .validate();
    }
}
