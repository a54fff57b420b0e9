//! Strongly-typed identifiers for domain entities
//!
//! Questions and answers are keyed by store-assigned integers, users by UUID.
//! Newtype wrappers keep a question id from being passed where an answer id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when an identifier cannot be parsed from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier '{value}' is not a number: {source}")]
    NotNumeric {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

macro_rules! define_serial_id {
    ($name:ident, $entity:literal) => {
        /// Store-assigned integer identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store identifier
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the entity name used in error messages and logs
            pub fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(IdParseError::Empty);
                }
                trimmed
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|source| IdParseError::NotNumeric {
                        value: trimmed.to_string(),
                        source,
                    })
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_serial_id!(QuestionId, "Question");
define_serial_id!(AnswerId, "Answer");

/// Identifier of the user who owns a question or answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_parsing() {
        let parsed: AnswerId = "17".parse().unwrap();
        assert_eq!(parsed, AnswerId::new(17));
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!("".parse::<QuestionId>(), Err(IdParseError::Empty));
        assert_eq!("   ".parse::<QuestionId>(), Err(IdParseError::Empty));
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let user_id = UserId::from(uuid);
        let back: Uuid = user_id.into();
        assert_eq!(uuid, back);
    }
}
