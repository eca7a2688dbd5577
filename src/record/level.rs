//! Severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Severity of a record, ordered by rank.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Error = 2,
}

impl Level {
    /// Every level, lowest rank first.
    pub const ALL: [Level; 3] = [Level::Debug, Level::Info, Level::Error];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Error => "error",
        }
    }

    /// Numeric rank used by the gate.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Level::Debug),
            1 => Some(Level::Info),
            2 => Some(Level::Error),
            _ => None,
        }
    }
}

/// Display name for a raw rank. Ranks with no level render as `"unknown"`,
/// which does not parse back.
pub fn rank_name(rank: u8) -> &'static str {
    Level::from_rank(rank).map_or("unknown", Level::as_str)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::InvalidLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("eRRor".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        match "warn".parse::<Level>() {
            Err(LogError::InvalidLevel(s)) => assert_eq!(s, "warn"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_ordering_follows_rank() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Error);
        assert_eq!(Level::Error.rank(), 2);
    }

    #[test]
    fn test_unknown_rank() {
        assert_eq!(rank_name(1), "info");
        assert_eq!(rank_name(7), "unknown");
        assert!(rank_name(7).parse::<Level>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Error).unwrap(), "\"error\"");
    }
}
