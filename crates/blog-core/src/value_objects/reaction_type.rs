//! Reaction types - the closed set of sentiments a user can leave on a post
//!
//! Wire codes are stable and stored as-is in the `reactions` table:
//!
//! | code | name  |
//! |------|-------|
//! | 1    | like  |
//! | 2    | love  |
//! | 3    | care  |
//! | 4    | haha  |
//! | 5    | wow   |
//! | 6    | sad   |
//! | 7    | angry |

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Reaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum ReactionType {
    Like = 1,
    Love = 2,
    Care = 3,
    Haha = 4,
    Wow = 5,
    Sad = 6,
    Angry = 7,
}

impl ReactionType {
    /// Every reaction type, in code order
    pub const ALL: [Self; 7] = [
        Self::Like,
        Self::Love,
        Self::Care,
        Self::Haha,
        Self::Wow,
        Self::Sad,
        Self::Angry,
    ];

    /// Numeric wire/storage code
    #[inline]
    pub const fn code(self) -> i16 {
        self as i16
    }

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Care => "care",
            Self::Haha => "haha",
            Self::Wow => "wow",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// Resolve a code submitted by a client
    ///
    /// # Errors
    /// Returns `DomainError::InvalidReactionType` for codes outside 1..=7
    pub fn from_code(code: i64) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|t| i64::from(t.code()) == code)
            .ok_or(DomainError::InvalidReactionType(code))
    }
}

impl TryFrom<i16> for ReactionType {
    type Error = DomainError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(i64::from(code))
    }
}

impl From<ReactionType> for i16 {
    fn from(t: ReactionType) -> Self {
        t.code()
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ReactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i16(self.code())
    }
}

impl<'de> Deserialize<'de> for ReactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}
