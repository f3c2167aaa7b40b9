//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a survey visitor.
///
/// Carried in the signed session cookie; keys the visitor's session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(Uuid);

impl VisitorId {
    /// Creates a new random VisitorId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a VisitorId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VisitorId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visitor_id_new_generates_unique_ids() {
        let a = VisitorId::new();
        let b = VisitorId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn visitor_id_parses_from_display_output() {
        let id = VisitorId::new();
        let parsed: VisitorId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn visitor_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<VisitorId>().is_err());
    }
}
