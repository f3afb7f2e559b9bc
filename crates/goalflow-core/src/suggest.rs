use crate::goal::{Goal, SubGoal};
use crate::task::Task;
use crate::types::GoalType;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Suggestion tree
// ---------------------------------------------------------------------------

/// A drafted goal as returned by the suggestion model. Field names follow
/// the model's JSON contract (`subgoals`, `suggestedTags`,
/// `suggestedDeadline`), which is why the camelCase renames are pinned here
/// rather than left to convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSuggestion {
    pub title: String,
    pub description: String,
    #[serde(rename = "suggestedDeadline")]
    pub suggested_deadline: NaiveDate,
    pub subgoals: Vec<SuggestedSubGoal>,
    #[serde(rename = "suggestedTags", default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedSubGoal {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<SuggestedTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTask {
    pub title: String,
    pub description: String,
    /// Estimated days to complete, as the model writes it (e.g. "2").
    #[serde(default)]
    pub estimated_duration: Option<String>,
}

// ---------------------------------------------------------------------------
// Deterministic fallback
// ---------------------------------------------------------------------------

/// The skeleton handed back when suggestion generation fails for any reason.
/// Same shape as a real suggestion so the adopt path needs no special case.
pub fn fallback_suggestion(user_input: &str, today: NaiveDate) -> GoalSuggestion {
    GoalSuggestion {
        title: format!("Goal related to: {user_input}"),
        description: "Please try again or refine your goal description.".to_string(),
        suggested_deadline: today + Duration::days(30),
        subgoals: vec![SuggestedSubGoal {
            title: "Define specific objectives".to_string(),
            description: "Break down your goal into specific, measurable objectives".to_string(),
            tasks: vec![
                SuggestedTask {
                    title: "Research best practices".to_string(),
                    description: "Find industry standards and best approaches".to_string(),
                    estimated_duration: Some("2".to_string()),
                },
                SuggestedTask {
                    title: "Set measurable targets".to_string(),
                    description: "Define KPIs and success metrics".to_string(),
                    estimated_duration: Some("1".to_string()),
                },
            ],
        }],
        tags: vec!["Planning".to_string(), "Goals".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Materialization
// ---------------------------------------------------------------------------

impl GoalSuggestion {
    /// Turn the draft into a real goal tree: fresh ids throughout, every
    /// status not started, every task at medium priority.
    pub fn into_goal(self, goal_type: GoalType) -> Goal {
        let mut goal = Goal::new(self.title, goal_type);
        goal.description = Some(self.description);
        goal.deadline = Some(self.suggested_deadline);
        goal.set_tags(self.tags);

        for suggested in self.subgoals {
            let mut sub = SubGoal::new(suggested.title);
            sub.description = Some(suggested.description);
            for t in suggested.tasks {
                let mut task = Task::new(t.title);
                task.description = Some(t.description);
                task.estimated_duration = t.estimated_duration;
                sub.tasks.push(task);
            }
            goal.subgoals.push(sub);
        }
        goal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
