//! Logical join tokens between WHERE conditions.

use crate::error::{CondError, CondResult};
use std::fmt;
use std::str::FromStr;

/// How a condition is joined to the conditions accumulated before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// `AND`
    #[default]
    And,
    /// `OR`
    Or,
}

impl Separator {
    /// SQL keyword for this separator.
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::And => "AND",
            Separator::Or => "OR",
        }
    }

    /// Parse a separator token (case-insensitive, surrounding whitespace ignored).
    pub fn parse(token: &str) -> CondResult<Self> {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("AND") {
            Ok(Separator::And)
        } else if trimmed.eq_ignore_ascii_case("OR") {
            Ok(Separator::Or)
        } else {
            Err(CondError::invalid_separator(token))
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = CondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
