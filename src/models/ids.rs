//! Strongly-typed ID wrapper for weekly reports

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "rpt-";

/// Unique identifier of a submitted weekly report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string, with or without the display prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether `s` is a display-form prefix of this ID (e.g. "rpt-550e8400")
    pub fn matches_short(&self, s: &str) -> bool {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        !s.is_empty() && self.0.to_string().starts_with(s)
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ReportId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ReportId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ReportId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("rpt-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ReportId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed = ReportId::parse(&format!("rpt-{}", uuid_str)).unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_matches_short() {
        let id = ReportId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches_short("rpt-550e8400"));
        assert!(id.matches_short("550e"));
        assert!(!id.matches_short("rpt-"));
        assert!(!id.matches_short("rpt-deadbeef"));
    }

    #[test]
    fn test_id_serialization() {
        let id = ReportId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ReportId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
