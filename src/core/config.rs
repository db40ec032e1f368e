//! Game configuration.
//!
//! Embedders configure a table at startup by providing a `GameConfig`:
//! - the dice seed
//! - the two presentation delays (dice animation, forfeited-roll pause)
//! - per-color display names
//! - the accepted login `Credentials`
//!
//! Board geometry is fixed and lives in `board::topology`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};
use crate::session::Credentials;

/// Default dice animation delay.
pub const DEFAULT_ROLL_DELAY_MS: u64 = 1000;

/// Default pause before a forfeited roll passes the turn.
pub const DEFAULT_PASS_DELAY_MS: u64 = 1500;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Dice seed. Equal seeds replay equal games.
    pub seed: u64,

    /// Delay between a roll request and the value landing.
    pub roll_delay_ms: u64,

    /// Delay between "no legal move" and the turn passing.
    pub pass_delay_ms: u64,

    /// Display name per color.
    pub player_names: ColorMap<String>,

    /// Accepted logins.
    pub credentials: Credentials,
}

impl GameConfig {
    /// Create a configuration with the given dice seed and default delays.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            roll_delay_ms: DEFAULT_ROLL_DELAY_MS,
            pass_delay_ms: DEFAULT_PASS_DELAY_MS,
            player_names: ColorMap::new(|c| format!("{} Player", c)),
            credentials: Credentials::default(),
        }
    }

    /// Create a configuration seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Set the dice animation delay.
    #[must_use]
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the forfeited-roll pause.
    #[must_use]
    pub fn with_pass_delay(mut self, delay: Duration) -> Self {
        self.pass_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set both delays to zero (headless play).
    #[must_use]
    pub fn without_delays(self) -> Self {
        self.with_roll_delay(Duration::ZERO)
            .with_pass_delay(Duration::ZERO)
    }

    /// Set a color's display name.
    #[must_use]
    pub fn with_player_name(mut self, color: Color, name: impl Into<String>) -> Self {
        self.player_names[color] = name.into();
        self
    }

    /// Replace the accepted logins.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    #[must_use]
    pub fn roll_delay(&self) -> Duration {
        Duration::from_millis(self.roll_delay_ms)
    }

    #[must_use]
    pub fn pass_delay(&self) -> Duration {
        Duration::from_millis(self.pass_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(9);

        assert_eq!(config.seed, 9);
        assert_eq!(config.roll_delay(), Duration::from_millis(1000));
        assert_eq!(config.pass_delay(), Duration::from_millis(1500));
        assert_eq!(config.player_names[Color::Yellow], "Yellow Player");
        assert_eq!(config.credentials, Credentials::default());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(1)
            .with_roll_delay(Duration::from_millis(250))
            .with_pass_delay(Duration::from_secs(2))
            .with_player_name(Color::Red, "Ana");

        assert_eq!(config.roll_delay_ms, 250);
        assert_eq!(config.pass_delay_ms, 2000);
        assert_eq!(config.player_names[Color::Red], "Ana");
        assert_eq!(config.player_names[Color::Green], "Green Player");
    }

    #[test]
    fn test_huge_delay_saturates() {
        let config = GameConfig::new(1)
            .with_roll_delay(Duration::MAX)
            .with_pass_delay(Duration::MAX);

        assert_eq!(config.roll_delay_ms, u64::MAX);
        assert_eq!(config.pass_delay_ms, u64::MAX);
    }

    #[test]
    fn test_without_delays() {
        let config = GameConfig::new(1).without_delays();

        assert_eq!(config.roll_delay(), Duration::ZERO);
        assert_eq!(config.pass_delay(), Duration::ZERO);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(3).with_player_name(Color::Blue, "Bo");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
