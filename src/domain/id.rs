use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier of a person known to the hospital.
///
/// The ID is fixed when the person is constructed and never changes. A
/// [`Hospital`](crate::Hospital) indexes each role separately, so a patient
/// and a doctor may share an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u32);

impl PersonId {
    /// Create a person ID from its integer value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the integer value of this ID.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PersonId {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PersonId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|source| ParseIdError {
                input: s.to_string(),
                source,
            })
    }
}

/// Error returned when a string is not a valid person ID.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid person ID '{input}': must be a non-negative integer")]
pub struct ParseIdError {
    input: String,
    #[source]
    source: ParseIntError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("42".parse::<PersonId>().unwrap(), PersonId::new(42));
        assert_eq!(" 7 ".parse::<PersonId>().unwrap(), PersonId::new(7));
    }

    #[test]
    fn rejects_negative_and_non_numeric_input() {
        for input in ["-1", "abc", "", "1.5"] {
            let error = input.parse::<PersonId>().unwrap_err();
            assert!(
                error.to_string().starts_with("Invalid person ID"),
                "unexpected error for {input:?}: {error}"
            );
        }
    }

    #[test]
    fn displays_bare_integer() {
        assert_eq!(PersonId::new(1001).to_string(), "1001");
    }
}
