//! Engine-native move identifier.
//!
//! The tracker never interprets a move's geometry; the oracle alone knows
//! what `e2e4`, `P@e5` or `7g7f+` mean. `NativeMove` only carries the string.

use std::fmt;

use crate::errors::{TrackerError, TrackerResult};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeMove(String);

impl NativeMove {
    /// Wrap a native notation string. Empty strings are rejected.
    pub fn new(notation: impl Into<String>) -> TrackerResult<Self> {
        let notation = notation.into();
        if notation.is_empty() {
            return Err(TrackerError::EmptyMove);
        }
        Ok(Self(notation))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NativeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NativeMove {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for NativeMove {
    type Error = TrackerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for NativeMove {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
