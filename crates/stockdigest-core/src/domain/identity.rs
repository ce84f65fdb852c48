use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_IDENTITY_LEN: usize = 128;

/// Opaque key of a user's record, usually the identity provider's subject
/// claim (`auth0|5f7c...`, `samlp|corp|a/b=`).
///
/// Kept byte for byte, whitespace included. The value is quoted into SQL
/// text, so only characters a quoted literal cannot carry unambiguously are
/// refused: NUL, and backslash (engines disagree on whether it escapes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptyIdentity);
        }

        let len = input.chars().count();
        if len > MAX_IDENTITY_LEN {
            return Err(ValidationError::IdentityTooLong {
                len,
                max: MAX_IDENTITY_LEN,
            });
        }

        if let Some((index, ch)) = input
            .chars()
            .enumerate()
            .find(|(_, ch)| matches!(ch, '\0' | '\\'))
        {
            return Err(ValidationError::IdentityInvalidChar { ch, index });
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Identity {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Identity {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}
