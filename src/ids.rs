//! Person identifiers
//!
//! A [`PersonId`] is a 12-byte value rendered on the wire as its 24-character
//! lowercase hex encoding. The storage layer generates a fresh id on create;
//! clients never choose one.
//!
//! ```rust
//! use person_service::ids::PersonId;
//! use std::str::FromStr;
//!
//! let id = PersonId::new();
//! assert_eq!(id.to_string().len(), 24);
//!
//! let parsed = PersonId::from_str("5f165e2e4de9b442e60b3904").unwrap();
//! assert_eq!(parsed.to_string(), "5f165e2e4de9b442e60b3904");
//! ```

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a Person document.
///
/// Wraps the storage-native [`ObjectId`] so the rest of the crate never deals
/// with raw driver types. On the wire it is always the canonical lowercase
/// 24-hex-character encoding; anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(ObjectId);

impl PersonId {
    /// Generates a fresh, globally unique id.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Returns the canonical 24-hex-character encoding.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Returns the storage-native id.
    #[must_use]
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for PersonId {
    type Err = PersonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the canonical form round-trips, so uppercase hex is rejected
        // even though the underlying decoder would accept it.
        if s.len() != 24 || !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(PersonIdError::Malformed {
                value: s.to_string(),
            });
        }

        let oid = ObjectId::parse_str(s).map_err(PersonIdError::Parse)?;
        Ok(Self(oid))
    }
}

impl From<ObjectId> for PersonId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<PersonId> for ObjectId {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for person id parsing.
#[derive(Debug, thiserror::Error)]
pub enum PersonIdError {
    /// The input was not exactly 24 lowercase hex characters.
    #[error("malformed person id {value:?}: expected 24 hex characters")]
    Malformed {
        /// The rejected input.
        value: String,
    },

    /// The hex string could not be decoded into a 12-byte id.
    #[error("failed to parse person id: {0}")]
    Parse(#[from] mongodb::bson::oid::Error),
}
