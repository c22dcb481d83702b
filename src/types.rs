use jiff::Timestamp;
use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BoardError;

/// A ticket as delivered by the ticket source.
///
/// Every field is carried as text exactly as fetched. A field that is missing
/// or `null` on the wire becomes the empty string, so a malformed record still
/// renders, filters and projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_string")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub project: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub submitter: String,

    /// Empty when the ticket is unassigned
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_developer: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub priority: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,

    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub ticket_type: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub created_date: String,
}

impl Ticket {
    /// Priority rank for ordering, if the priority is a known level
    pub fn priority_level(&self) -> Option<PriorityLevel> {
        self.priority.parse().ok()
    }

    /// Creation time for chronological ordering, if the date parses
    pub fn created_at(&self) -> Option<Timestamp> {
        parse_timestamp(&self.created_date)
    }
}

/// Accept strings, numbers, booleans and `null` for a text field.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Parse a creation date as an RFC 3339 timestamp, a civil datetime or a
/// civil date. Civil values are interpreted in UTC.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts);
    }
    if let Ok(dt) = raw.parse::<DateTime>() {
        return dt.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp());
    }
    raw.parse::<Date>()
        .ok()
        .and_then(|d| d.to_zoned(TimeZone::UTC).ok())
        .map(|z| z.timestamp())
}

/// Known priority levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

enum_display_fromstr!(
    PriorityLevel,
    BoardError::InvalidPriority,
    {
        Low => "low",
        Medium => "medium" | "normal",
        High => "high",
        Critical => "critical" | "urgent",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_ticket() {
        let json = r#"{
            "_id": "64f0c1",
            "name": "Login fails",
            "project": "Portal",
            "submitter": "ana",
            "assigned_developer": "bo",
            "priority": "High",
            "status": "Open",
            "type": "Bug",
            "description": "500 on submit",
            "created_date": "2024-03-01T10:00:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "64f0c1");
        assert_eq!(ticket.ticket_type, "Bug");
        assert_eq!(ticket.priority_level(), Some(PriorityLevel::High));
        assert!(!ticket.assigned_developer.is_empty());
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let json = r#"{"id": "t-1", "name": "Only a name", "assigned_developer": null}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "t-1");
        assert_eq!(ticket.assigned_developer, "");
        assert_eq!(ticket.description, "");
    }

    #[test]
    fn test_deserialize_non_string_scalars() {
        let json = r#"{"_id": 42, "priority": 3, "status": true}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "42");
        assert_eq!(ticket.priority, "3");
        assert_eq!(ticket.status, "true");
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let ticket = Ticket {
            id: "t-9".to_string(),
            ticket_type: "Feature".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["_id"], "t-9");
        assert_eq!(value["type"], "Feature");
    }

    #[test]
    fn test_priority_level_order_and_aliases() {
        assert!(PriorityLevel::Low < PriorityLevel::Medium);
        assert!(PriorityLevel::High < PriorityLevel::Critical);
        assert_eq!("URGENT".parse::<PriorityLevel>().unwrap(), PriorityLevel::Critical);
        assert_eq!("Normal".parse::<PriorityLevel>().unwrap(), PriorityLevel::Medium);
        assert!("whenever".parse::<PriorityLevel>().is_err());
        assert_eq!(PriorityLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2024-01-02T00:00:00Z").unwrap();
        let civil = parse_timestamp("2024-01-02").unwrap();
        let civil_dt = parse_timestamp("2024-01-02T06:00:00").unwrap();
        assert_eq!(rfc, civil);
        assert!(civil_dt > civil);
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("last tuesday").is_none());
    }
}
