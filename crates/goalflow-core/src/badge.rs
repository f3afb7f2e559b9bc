use crate::types::{Priority, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StyleToken
// ---------------------------------------------------------------------------

/// Renderer-agnostic emphasis level for a badge. Front ends map these onto
/// whatever visual treatment they have; the names follow the historical
/// variants so existing themes keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl StyleToken {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleToken::Default => "default",
            StyleToken::Secondary => "secondary",
            StyleToken::Destructive => "destructive",
            StyleToken::Outline => "outline",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub style: StyleToken,
}

impl Badge {
    fn new(label: impl Into<String>, style: StyleToken) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification tables
// ---------------------------------------------------------------------------

/// Badge for a raw status string. Total: any input yields a valid badge, so
/// a record written by a newer version of the system (say `"archived"`)
/// renders as a neutral badge instead of breaking the page. This is the one
/// status table; every surface goes through it.
pub fn classify_status(status: &str) -> Badge {
    match Status::from_wire(status) {
        Status::Completed => Badge::new("Completed", StyleToken::Default),
        Status::InProgress => Badge::new("In Progress", StyleToken::Secondary),
        Status::AtRisk => Badge::new("At Risk", StyleToken::Destructive),
        Status::Blocked => Badge::new("Blocked", StyleToken::Destructive),
        Status::NotStarted => Badge::new("Not Started", StyleToken::Outline),
        Status::Other(raw) => Badge::new(humanize(&raw), StyleToken::Outline),
    }
}

pub fn status_badge(status: &Status) -> Badge {
    classify_status(status.as_str())
}

/// Badge for a raw priority string. Unknown values render as the medium row.
pub fn classify_priority(priority: &str) -> Badge {
    priority_badge(Priority::from_wire(priority))
}

pub fn priority_badge(priority: Priority) -> Badge {
    match priority {
        Priority::High => Badge::new("High", StyleToken::Destructive),
        Priority::Medium => Badge::new("Medium", StyleToken::Secondary),
        Priority::Low => Badge::new("Low", StyleToken::Outline),
    }
}

/// Chart palette, keyed by canonical status. Anything outside the three
/// tracked states shares the gray swatch.
pub fn status_color(status: &Status) -> &'static str {
    match status {
        Status::Completed => "#10B981",
        Status::InProgress => "#3B82F6",
        Status::AtRisk => "#F59E0B",
        _ => "#6B7280",
    }
}

/// Title-case a raw wire value for display: underscores become spaces, each
/// word gets a leading capital. Empty input reads as "Unknown".
fn humanize(raw: &str) -> String {
    if raw.is_empty() {
        return "Unknown".to_string();
    }
    raw.split(['_', ' '])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
