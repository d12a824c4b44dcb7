use crate::street::Street;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Fixed-limit bet unit for each betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetBetUnits {
    pub preflop: u64,
    pub flop: u64,
    pub turn: u64,
    pub river: u64,
}

impl Default for StreetBetUnits {
    fn default() -> Self {
        Self { preflop: 20, flop: 20, turn: 40, river: 40 }
    }
}

impl StreetBetUnits {
    /// Unit for `street`; zero outside the betting streets.
    pub fn for_street(&self, street: Street) -> u64 {
        match street {
            Street::Preflop => self.preflop,
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::River => self.river,
            _ => 0,
        }
    }
}

/// Table rules fixed at construction.
///
/// ```
/// use river_rat::config::TableConfig;
///
/// let cfg = TableConfig::from_toml_str("big_blind = 50\nsmall_blind = 25").unwrap();
/// assert_eq!(cfg.big_blind, 50);
/// assert_eq!(cfg.max_raises, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u64,
    pub big_blind: u64,
    pub bet_units: StreetBetUnits,
    pub max_raises: u32,
    pub starting_stack: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            bet_units: StreetBetUnits::default(),
            max_raises: 3,
            starting_stack: 1000,
        }
    }
}

impl TableConfig {
    /// Parse and validate a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind == 0 {
            return Err(ConfigError::Invalid("big_blind must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::Invalid(format!(
                "small_blind {} exceeds big_blind {}",
                self.small_blind, self.big_blind
            )));
        }
        let units = self.bet_units;
        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            if units.for_street(street) == 0 {
                return Err(ConfigError::Invalid(format!("bet unit for {street} must be positive")));
            }
        }
        if self.starting_stack == 0 {
            return Err(ConfigError::Invalid("starting_stack must be positive".into()));
        }
        Ok(())
    }

    pub fn bet_unit(&self, street: Street) -> u64 {
        self.bet_units.for_street(street)
    }
}
