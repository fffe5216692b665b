//! Strategy orientation shared by the market and content queries

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orientation filter/ordering mode.
///
/// `Long` is size-weighted (largest market cap first), `Short` is
/// volatility-weighted (largest absolute move first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Long,
    Short,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Long => "long",
            Strategy::Short => "short",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Strategy::Long),
            "short" => Ok(Strategy::Short),
            _ => Err(ParseError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("long".parse::<Strategy>().unwrap(), Strategy::Long);
        assert_eq!(" Short".parse::<Strategy>().unwrap(), Strategy::Short);
    }

    #[test]
    fn test_parse_unknown_strategy() {
        let err = "swing".parse::<Strategy>().unwrap_err();
        assert_eq!(err, ParseError::UnknownStrategy("swing".to_string()));
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&Strategy::Short).unwrap();
        assert_eq!(json, "\"short\"");
        assert_eq!(Strategy::default(), Strategy::Long);
    }
}
