use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state shared by goals, sub-goals, and tasks.
///
/// Stored records carry two spellings for the active state (`in_progress`
/// and `on_track`); both deserialize to [`Status::InProgress`], and the
/// canonical serialized form is `in_progress`. Any other wire value is kept
/// verbatim in [`Status::Other`] so records written by newer versions of the
/// system round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    NotStarted,
    InProgress,
    AtRisk,
    Blocked,
    Completed,
    /// Unrecognized wire value, preserved as-is.
    Other(String),
}

impl Status {
    /// Total mapping from a raw wire string. Never fails; this is the one
    /// place the `on_track`/`in_progress` synonym pair is reconciled.
    pub fn from_wire(s: &str) -> Status {
        match s {
            "not_started" => Status::NotStarted,
            "in_progress" | "on_track" => Status::InProgress,
            "at_risk" => Status::AtRisk,
            "blocked" => Status::Blocked,
            "completed" => Status::Completed,
            other => Status::Other(other.to_string()),
        }
    }

    /// The five canonical states, in lifecycle order.
    pub fn known() -> [Status; 5] {
        [
            Status::NotStarted,
            Status::InProgress,
            Status::AtRisk,
            Status::Blocked,
            Status::Completed,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::AtRisk => "at_risk",
            Status::Blocked => "blocked",
            Status::Completed => "completed",
            Status::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Status::InProgress)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse for human-entered values (CLI arguments). Accepts both
/// active-state spellings; rejects anything outside the canonical set.
impl std::str::FromStr for Status {
    type Err = crate::error::GoalFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Status::from_wire(s) {
            Status::Other(_) => Err(crate::error::GoalFlowError::InvalidStatus(s.to_string())),
            status => Ok(status),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Status::from_wire(&s))
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Task priority. Unknown wire values read as `Medium`, matching how the
/// dashboards have always rendered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn from_wire(s: &str) -> Priority {
        match s {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = crate::error::GoalFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| crate::error::GoalFlowError::InvalidPriority(s.to_string()))
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Priority::from_wire(&s))
    }
}

// ---------------------------------------------------------------------------
// GoalType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    #[default]
    Individual,
    Team,
}

impl GoalType {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalType::Individual => "individual",
            GoalType::Team => "team",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GoalType {
    type Err = crate::error::GoalFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(GoalType::Individual),
            "team" => Ok(GoalType::Team),
            _ => Err(crate::error::GoalFlowError::InvalidGoalType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    #[default]
    Member,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::GoalFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "member" => Ok(Role::Member),
            _ => Err(crate::error::GoalFlowError::InvalidRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_synonyms_collapse() {
        assert_eq!(Status::from_wire("in_progress"), Status::InProgress);
        assert_eq!(Status::from_wire("on_track"), Status::InProgress);
        assert_eq!(Status::from_wire("on_track").as_str(), "in_progress");
    }

    #[test]
    fn status_wire_is_total() {
        assert_eq!(
            Status::from_wire("archived"),
            Status::Other("archived".to_string())
        );
        assert_eq!(Status::from_wire(""), Status::Other(String::new()));
    }

    #[test]
    fn status_other_round_trips() {
        let status = Status::from_wire("archived");
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"archived\"");
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn status_strict_parse() {
        assert_eq!(Status::from_str("on_track").unwrap(), Status::InProgress);
        assert_eq!(Status::from_str("completed").unwrap(), Status::Completed);
        assert!(Status::from_str("archived").is_err());
    }

    #[test]
    fn status_known_round_trips() {
        for status in Status::known() {
            let parsed = Status::from_wire(status.as_str());
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn priority_unknown_reads_medium() {
        assert_eq!(Priority::from_wire("high"), Priority::High);
        assert_eq!(Priority::from_wire("urgent"), Priority::Medium);
        assert!(Priority::from_str("urgent").is_err());
    }

    #[test]
    fn priority_serde_round_trip() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(back, Priority::Medium);
    }

    #[test]
    fn goal_type_parse() {
        assert_eq!(GoalType::from_str("team").unwrap(), GoalType::Team);
        assert!(GoalType::from_str("org").is_err());
    }

    #[test]
    fn role_parse() {
        assert_eq!(Role::from_str("owner").unwrap(), Role::Owner);
        assert!(Role::from_str("admin").is_err());
    }
}
