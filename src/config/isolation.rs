//! Read isolation level selection.

use std::fmt;
use std::str::FromStr;

use sea_orm::IsolationLevel;

/// Isolation level applied to read-only service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadIsolation {
    /// Whatever the store uses when none is requested
    StoreDefault,
    /// May observe rows written by transactions that have not committed yet
    #[default]
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl ReadIsolation {
    /// Level to request when opening a transaction; `None` keeps the store default.
    pub fn level(self) -> Option<IsolationLevel> {
        match self {
            ReadIsolation::StoreDefault => None,
            ReadIsolation::ReadUncommitted => Some(IsolationLevel::ReadUncommitted),
            ReadIsolation::ReadCommitted => Some(IsolationLevel::ReadCommitted),
            ReadIsolation::RepeatableRead => Some(IsolationLevel::RepeatableRead),
            ReadIsolation::Serializable => Some(IsolationLevel::Serializable),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ReadIsolation::StoreDefault => "default",
            ReadIsolation::ReadUncommitted => "read_uncommitted",
            ReadIsolation::ReadCommitted => "read_committed",
            ReadIsolation::RepeatableRead => "repeatable_read",
            ReadIsolation::Serializable => "serializable",
        }
    }
}

impl FromStr for ReadIsolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "default" => Ok(ReadIsolation::StoreDefault),
            "read_uncommitted" => Ok(ReadIsolation::ReadUncommitted),
            "read_committed" => Ok(ReadIsolation::ReadCommitted),
            "repeatable_read" => Ok(ReadIsolation::RepeatableRead),
            "serializable" => Ok(ReadIsolation::Serializable),
            other => Err(format!("unknown isolation level `{}`", other)),
        }
    }
}

impl fmt::Display for ReadIsolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_weakest_level() {
        assert_eq!(ReadIsolation::default(), ReadIsolation::ReadUncommitted);
        assert_eq!(
            ReadIsolation::default().level(),
            Some(IsolationLevel::ReadUncommitted)
        );
    }

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!(
            "READ-COMMITTED".parse::<ReadIsolation>().unwrap(),
            ReadIsolation::ReadCommitted
        );
        assert_eq!(
            "repeatable read".parse::<ReadIsolation>().unwrap(),
            ReadIsolation::RepeatableRead
        );
        assert_eq!(
            "default".parse::<ReadIsolation>().unwrap().level(),
            None
        );
        assert!("snapshot".parse::<ReadIsolation>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let level = ReadIsolation::Serializable;
        assert_eq!(level.to_string().parse::<ReadIsolation>().unwrap(), level);
    }
}
