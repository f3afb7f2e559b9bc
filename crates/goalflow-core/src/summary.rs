use crate::goal::Goal;
use chrono::{DateTime, Datelike, Utc};

/// Shown when a goal has no task comments to summarize.
pub const NO_COMMENTS_SUMMARY: &str = "No task comments available to generate a weekly summary. \
Please add comments to your tasks first.";

/// Shown when the model replies with no usable content.
pub const UNAVAILABLE_SUMMARY: &str = "Unable to generate summary at this time.";

/// Shown when summary generation fails.
pub const FALLBACK_SUMMARY: &str = "This week showed mixed progress with some tasks completed \
and others facing challenges. Review the blockers identified in the check-ins and consider \
adjusting priorities for the coming week.";

/// Week index for a summary. With a goal creation date this is the goal's
/// own week count, `ceil((days_since_creation + 1) / 7)`, so the first seven
/// days are week 1. Without one it falls back to the ISO week of `now`.
pub fn week_number(now: DateTime<Utc>, goal_created_at: Option<DateTime<Utc>>) -> u32 {
    match goal_created_at {
        Some(created) => {
            let days = (now - created).num_days().max(0);
            ((days + 7) / 7) as u32
        }
        None => now.iso_week().week(),
    }
}

/// Flatten a goal's commented tasks into prompt-ready blocks. Tasks without
/// comments are skipped entirely.
pub fn collect_task_comments(goal: &Goal) -> Vec<String> {
    goal.subgoals
        .iter()
        .flat_map(|s| &s.tasks)
        .filter(|t| !t.comments.is_empty())
        .map(|t| format!("Task: {}\nComments:\n{}", t.title, t.comments.join("\n")))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
