//! Matcher configuration.

use crate::alphabet::Alphabet;
use crate::error::WildscanError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Default wildcard symbol.
pub const DEFAULT_WILDCARD: u8 = b'?';

/// How the scanner resolves a symbol with no direct edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Follow suffix links at scan time (amortized linear)
    #[default]
    Links,
    /// Precompute a full `states x alphabet` transition table at build time
    Dense,
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStrategy::Links => write!(f, "links"),
            ScanStrategy::Dense => write!(f, "dense"),
        }
    }
}

impl FromStr for ScanStrategy {
    type Err = WildscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "links" => Ok(ScanStrategy::Links),
            "dense" => Ok(ScanStrategy::Dense),
            _ => Err(WildscanError::InvalidConfig(format!(
                "unknown scan strategy '{}' (expected links or dense)",
                s
            ))),
        }
    }
}

/// Configuration shared by pattern parsing and automaton construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    /// Symbol matching any single text symbol
    pub wildcard: u8,
    /// Symbols allowed in literal runs
    pub alphabet: Alphabet,
    /// Transition resolution strategy
    pub strategy: ScanStrategy,
}

impl MatchConfig {
    /// Creates a config with the given wildcard and alphabet and the default strategy.
    pub fn new(wildcard: u8, alphabet: Alphabet) -> Self {
        Self {
            wildcard,
            alphabet,
            strategy: ScanStrategy::default(),
        }
    }

    /// Returns a copy using `strategy`.
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks that the wildcard cannot be confused with a literal symbol.
    pub fn validate(&self) -> Result<(), WildscanError> {
        if self.alphabet.contains(self.wildcard) {
            return Err(WildscanError::InvalidConfig(format!(
                "wildcard {:?} lies inside the alphabet {}",
                self.wildcard as char, self.alphabet
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WILDCARD, Alphabet::lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MatchConfig::default();
        assert_eq!(config.wildcard, b'?');
        assert_eq!(config.strategy, ScanStrategy::Links);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wildcard_inside_alphabet_rejected() {
        let config = MatchConfig::new(b'm', Alphabet::lowercase());
        assert!(matches!(
            config.validate(),
            Err(WildscanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("links".parse::<ScanStrategy>().unwrap(), ScanStrategy::Links);
        assert_eq!("DENSE".parse::<ScanStrategy>().unwrap(), ScanStrategy::Dense);
        assert!("fast".parse::<ScanStrategy>().is_err());
    }
}
