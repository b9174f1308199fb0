use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("card id must not be empty")]
pub struct EmptyCardIdError;

/// Stable identifier of a card.
///
/// Registry ids are borrowed from static literals; ids arriving from gesture
/// payloads or config are owned. Both compare equal by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(Cow<'static, str>);

impl CardId {
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyCardIdError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(EmptyCardIdError);
        }
        if trimmed.len() == id.len() {
            Ok(Self(Cow::Owned(id)))
        } else {
            Ok(Self(Cow::Owned(trimmed.to_string())))
        }
    }

    /// Builds an id from a literal. The literal must be non-empty.
    #[must_use]
    pub const fn from_static(id: &'static str) -> Self {
        assert!(!id.is_empty(), "static card id must not be empty");
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardId {
    type Error = EmptyCardIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CardId {
    type Error = EmptyCardIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CardId> for String {
    fn from(value: CardId) -> Self {
        value.0.into_owned()
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CardId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CardId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
