//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Timestamp, ValidationError};

/// Unique identifier for a community post.
///
/// Seeded posts carry small fixed ids ("1".."4"); posts created at runtime
/// carry the millisecond timestamp of their creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Creates a PostId, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("post_id"));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Generates time-based post ids that never repeat within one generator.
///
/// Two posts created in the same millisecond would share a raw timestamp, so
/// the generator bumps the value past the last id it handed out.
#[derive(Debug, Clone, Default)]
pub struct PostIdGenerator {
    last_millis: i64,
}

impl PostIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id based on the current time.
    pub fn next_id(&mut self) -> PostId {
        self.next_id_at(Timestamp::now())
    }

    /// Returns the next id for the given moment.
    pub fn next_id_at(&mut self, at: Timestamp) -> PostId {
        let millis = at.as_unix_millis().max(self.last_millis + 1);
        self.last_millis = millis;
        PostId(millis.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn post_id_rejects_empty() {
        assert!(PostId::new("").is_err());
        assert!(PostId::new("   ").is_err());
    }

    #[test]
    fn post_id_parses_from_str() {
        let id: PostId = "42".parse().unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn post_id_serializes_as_plain_string() {
        let id = PostId::new("1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
    }

    #[test]
    fn generator_uses_timestamp_millis() {
        let mut generator = PostIdGenerator::new();
        let at = Timestamp::from_unix_millis(1_705_276_800_123);
        assert_eq!(generator.next_id_at(at).as_str(), "1705276800123");
    }

    #[test]
    fn generator_never_repeats_within_same_millisecond() {
        let mut generator = PostIdGenerator::new();
        let at = Timestamp::from_unix_millis(1_000);

        let ids: Vec<PostId> = (0..5).map(|_| generator.next_id_at(at)).collect();
        let unique: HashSet<&PostId> = ids.iter().collect();

        assert_eq!(unique.len(), 5);
        assert_eq!(ids[4].as_str(), "1004");
    }

    #[test]
    fn generator_never_goes_backwards() {
        let mut generator = PostIdGenerator::new();
        generator.next_id_at(Timestamp::from_unix_millis(5_000));
        let earlier = generator.next_id_at(Timestamp::from_unix_millis(4_000));
        assert_eq!(earlier.as_str(), "5001");
    }
}
