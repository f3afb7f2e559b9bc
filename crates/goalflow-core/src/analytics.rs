use crate::badge::{status_badge, status_color};
use crate::config::DepartmentRule;
use crate::goal::Goal;
use crate::progress::{div_round, ratio_percent};
use crate::types::Status;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Goal status counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub at_risk: usize,
    pub not_started: usize,
    pub blocked: usize,
    pub other: usize,
}

pub fn status_counts(goals: &[Goal]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: goals.len(),
        ..Default::default()
    };
    for goal in goals {
        match &goal.status {
            Status::Completed => counts.completed += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::AtRisk => counts.at_risk += 1,
            Status::NotStarted => counts.not_started += 1,
            Status::Blocked => counts.blocked += 1,
            Status::Other(_) => counts.other += 1,
        }
    }
    counts
}

/// Percentage of goals whose status is completed. 0 for an empty set.
pub fn completion_rate(goals: &[Goal]) -> u8 {
    let completed = goals.iter().filter(|g| g.status.is_completed()).count();
    ratio_percent(completed, goals.len())
}

/// Weighted delivery score: completed goals count in full, active goals at
/// 0.7, everything else not at all. 0 for an empty set.
pub fn team_performance(goals: &[Goal]) -> u8 {
    let completed = goals.iter().filter(|g| g.status.is_completed()).count();
    let active = goals.iter().filter(|g| g.status.is_in_progress()).count();
    div_round(completed * 100 + active * 70, goals.len()) as u8
}

pub fn at_risk_count(goals: &[Goal]) -> usize {
    goals
        .iter()
        .filter(|g| matches!(g.status, Status::AtRisk))
        .count()
}

// ---------------------------------------------------------------------------
// Task status counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusCounts {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub blocked: usize,
}

/// Task tallies across every sub-goal of every goal, for the work-queue
/// stat cards.
pub fn task_status_counts(goals: &[Goal]) -> TaskStatusCounts {
    let mut counts = TaskStatusCounts::default();
    for task in goals
        .iter()
        .flat_map(|g| &g.subgoals)
        .flat_map(|s| &s.tasks)
    {
        counts.total += 1;
        match &task.status {
            Status::InProgress => counts.in_progress += 1,
            Status::Completed => counts.completed += 1,
            Status::Blocked => counts.blocked += 1,
            _ => {}
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Status distribution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: usize,
    pub color: String,
}

/// Pie-chart slices over the four states goals actually take, labeled from
/// the one classification table. Zero-count slices are omitted.
pub fn status_distribution(goals: &[Goal]) -> Vec<StatusSlice> {
    let counts = status_counts(goals);
    [
        (Status::Completed, counts.completed),
        (Status::InProgress, counts.in_progress),
        (Status::AtRisk, counts.at_risk),
        (Status::NotStarted, counts.not_started),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .map(|(status, value)| StatusSlice {
        name: status_badge(&status).label,
        value,
        color: status_color(&status).to_string(),
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Department rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentProgress {
    pub name: String,
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub progress: u8,
}

/// Group goals by tag keyword and score each group with the same 100/70
/// weighting as [`team_performance`].
///
/// A goal lands in the first rule whose keyword is contained in any of its
/// tags (case-insensitive); goals matching no rule land in the `fallback`
/// group. Groups with no goals are omitted; order follows the rule list,
/// fallback last.
pub fn department_rollup(
    goals: &[Goal],
    rules: &[DepartmentRule],
    fallback: &str,
) -> Vec<DepartmentProgress> {
    let mut buckets: Vec<(&str, Vec<&Goal>)> = rules
        .iter()
        .map(|r| (r.name.as_str(), Vec::new()))
        .collect();
    buckets.push((fallback, Vec::new()));

    for goal in goals {
        let idx = rules
            .iter()
            .position(|rule| {
                goal.tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&rule.keyword.to_lowercase()))
            })
            .unwrap_or(rules.len());
        buckets[idx].1.push(goal);
    }

    buckets
        .into_iter()
        .filter(|(_, goals)| !goals.is_empty())
        .map(|(name, goals)| {
            let completed = goals.iter().filter(|g| g.status.is_completed()).count();
            let in_progress = goals.iter().filter(|g| g.status.is_in_progress()).count();
            DepartmentProgress {
                name: name.to_string(),
                total: goals.len(),
                completed,
                in_progress,
                progress: div_round(completed * 100 + in_progress * 70, goals.len()) as u8,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Recent goals
// ---------------------------------------------------------------------------

/// Newest goals first, for activity panes. Goals without a creation
/// timestamp sort last; ties keep input order.
pub fn recent_goals(goals: &[Goal], limit: usize) -> Vec<&Goal> {
    let mut sorted: Vec<&Goal> = goals.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
