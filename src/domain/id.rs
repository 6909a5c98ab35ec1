//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event identifier - newtype for type safety.
///
/// The inner integer is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(u64);

impl EventId {
    /// Create a new EventId from a raw id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// User identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    /// Create a new UserId from a raw id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A numbered rank position. Doubles as the identity of the slot sold at
/// that position: there is at most one slot per rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u32);

impl Rank {
    /// Create a new Rank. Positions are 1-based; validating positivity is
    /// the transport layer's job.
    pub fn new(position: u32) -> Self {
        Self(position)
    }

    /// Get the raw position.
    pub fn position(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Rank {
    fn from(position: u32) -> Self {
        Self(position)
    }
}

/// Unique identifier for a vote record.
///
/// Generated as UUID v4 for new votes, or constructed from an existing
/// string for persistence/deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteId(String);

impl VoteId {
    /// Create a new `VoteId` with a generated UUID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the vote ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
