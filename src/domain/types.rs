//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (well-formed identifiers, trimmed
//! non-empty names, non-negative years) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided year was negative.
    #[error("year must not be negative")]
    NegativeYear,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Macro to generate opaque UUID-backed identifiers.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(
                    Uuid::parse_str(s.trim()).map_err(|_| TypeConstraintError::InvalidUuid)?,
                ))
            }
        }
    };
}

uuid_newtype!(MuseumId, "Unique identifier for a museum.");
uuid_newtype!(ArtworkId, "Unique identifier for an artwork.");
uuid_newtype!(ExhibitionId, "Unique identifier for an exhibition.");

/// Trims whitespace and rejects empty inputs.
fn trimmed_non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed.to_string())
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trimmed_non_empty(value.into()).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

non_empty_string_newtype!(MuseumName, "Museum display name, trimmed and non-empty.");
non_empty_string_newtype!(CityName, "City a museum is located in, trimmed and non-empty.");

/// Founding year of a museum. Never negative.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoundingYear(i32);

impl FoundingYear {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value < 0 {
            Err(TypeConstraintError::NegativeYear)
        } else {
            Ok(Self(value))
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}
