// Content identifiers
//
// Random v4 UUIDs: 122 bits of OS randomness, so ids are unguessable and never
// derived from a counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Opaque reference to one stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(Uuid);

impl ContentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Error)]
#[error("Invalid content id: {0}")]
pub struct ParseContentIdError(String);

/// Only the exact spelling `Display` produces is accepted. Uppercase, simple,
/// braced, urn and padded forms of the same UUID are different ids.
impl FromStr for ContentId {
    type Err = ParseContentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseContentIdError(s.to_string());
        let uuid = Uuid::parse_str(s).map_err(|_| invalid())?;
        let mut buf = Uuid::encode_buffer();
        let canonical: &str = uuid.hyphenated().encode_lower(&mut buf);
        if canonical != s {
            return Err(invalid());
        }
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_hyphenated_lowercase() {
        let id = ContentId::generate();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        assert_eq!(s, s.to_lowercase());
        assert_eq!(s.matches('-').count(), 4);
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = ContentId::generate();
        let parsed: ContentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-an-id".parse::<ContentId>().is_err());
        assert!("".parse::<ContentId>().is_err());
        assert!("../../etc/passwd".parse::<ContentId>().is_err());
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        let id = ContentId::generate().to_string();
        for alias in [
            id.to_uppercase(),
            id.replace('-', ""),
            format!("{{{id}}}"),
            format!("urn:uuid:{id}"),
            format!(" {id}"),
        ] {
            assert!(alias.parse::<ContentId>().is_err(), "accepted {alias}");
        }
    }
}
