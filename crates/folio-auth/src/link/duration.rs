//! The menu of share-link lifetimes offered to clients.

use std::fmt;
use std::str::FromStr;

use folio_core::error::AppError;

/// A share-link lifetime selectable by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareDuration {
    /// `24h`
    Day,
    /// `7d`
    Week,
    /// `30d`
    Month,
    /// `1y`
    Year,
}

impl ShareDuration {
    /// Every option, shortest first.
    pub const ALL: [ShareDuration; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Lifetime in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Self::Day => 86_400,
            Self::Week => 604_800,
            Self::Month => 2_592_000,
            Self::Year => 31_536_000,
        }
    }

    /// Label accepted by [`FromStr`].
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Year => "1y",
        }
    }
}

impl fmt::Display for ShareDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShareDuration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| AppError::validation("Invalid duration"))
    }
}
