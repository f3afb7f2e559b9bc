use crate::error::{GoalFlowError, Result};
use crate::task::Task;
use crate::types::{GoalType, Status};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// WeeklySummary
// ---------------------------------------------------------------------------

/// One generated check-in digest, appended to the owning goal (newest last).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub week_number: u32,
}

// ---------------------------------------------------------------------------
// SubGoal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubGoal {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

impl SubGoal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            status: Status::NotStarted,
            assigned_to: None,
            tasks: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Goal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub goal_type: GoalType,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subgoals: Vec<SubGoal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekly_summaries: Vec<WeeklySummary>,
}

impl Goal {
    pub fn new(title: impl Into<String>, goal_type: GoalType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            goal_type,
            status: Status::NotStarted,
            deadline: None,
            tags: Vec::new(),
            created_by: None,
            team_id: None,
            created_at: Some(now),
            updated_at: Some(now),
            subgoals: Vec::new(),
            weekly_summaries: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    // -----------------------------------------------------------------------
    // Subgoals and tasks
    // -----------------------------------------------------------------------

    pub fn add_subgoal(&mut self, title: impl Into<String>) -> String {
        let sub = SubGoal::new(title);
        let id = sub.id.clone();
        self.subgoals.push(sub);
        self.touch();
        id
    }

    pub fn subgoal(&self, id: &str) -> Option<&SubGoal> {
        self.subgoals.iter().find(|s| s.id == id)
    }

    pub fn subgoal_mut(&mut self, id: &str) -> Result<&mut SubGoal> {
        self.subgoals
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| GoalFlowError::SubGoalNotFound(id.to_string()))
    }

    /// Look up a task anywhere in the tree.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.subgoals
            .iter()
            .find_map(|s| s.tasks.iter().find(|t| t.id == task_id))
    }

    pub fn task_mut(&mut self, task_id: &str) -> Result<&mut Task> {
        self.subgoals
            .iter_mut()
            .find_map(|s| s.tasks.iter_mut().find(|t| t.id == task_id))
            .ok_or_else(|| GoalFlowError::TaskNotFound(task_id.to_string()))
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    /// Add a tag. Returns `true` if the tag was new, `false` if already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.touch();
        true
    }

    /// Replace the full tag list, deduplicating entries.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        let mut seen = std::collections::HashSet::new();
        self.tags = tags
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        self.touch();
    }

    // -----------------------------------------------------------------------
    // Weekly summaries
    // -----------------------------------------------------------------------

    pub fn add_weekly_summary(&mut self, summary: WeeklySummary) {
        self.weekly_summaries.push(summary);
        self.touch();
    }

    pub fn latest_summary(&self) -> Option<&WeeklySummary> {
        self.weekly_summaries.last()
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

// ---------------------------------------------------------------------------
// Parsing exported goal trees
// ---------------------------------------------------------------------------

/// Parse a JSON export containing an array of goals. Records may omit any
/// collection field; missing collections read as empty.
pub fn parse_goals(json: &str) -> Result<Vec<Goal>> {
    let goals = serde_json::from_str(json)?;
    Ok(goals)
}

pub fn parse_goal(json: &str) -> Result<Goal> {
    let goal = serde_json::from_str(json)?;
    Ok(goal)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
