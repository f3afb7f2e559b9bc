use crate::error::{GoalFlowError, Result};
use crate::types::{Priority, Status};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            status: Status::NotStarted,
            priority: Priority::Medium,
            estimated_duration: None,
            assigned_to: None,
            due_date: None,
            comments: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }
}

// ---------------------------------------------------------------------------
// Task list operations (operate on a mutable Vec<Task>)
// ---------------------------------------------------------------------------

pub fn add_task(tasks: &mut Vec<Task>, title: impl Into<String>) -> String {
    let task = Task::new(title);
    let id = task.id.clone();
    tasks.push(task);
    id
}

pub fn set_status(tasks: &mut [Task], id: &str, status: Status) -> Result<()> {
    let task = find_mut(tasks, id)?;
    task.status = status;
    Ok(())
}

/// Checkbox semantics: a completed task flips back to not started, anything
/// else flips to completed. Returns the status the task ended up in.
pub fn toggle_completed(tasks: &mut [Task], id: &str) -> Result<Status> {
    let task = find_mut(tasks, id)?;
    task.status = if task.status.is_completed() {
        Status::NotStarted
    } else {
        Status::Completed
    };
    Ok(task.status.clone())
}

/// Append a check-in comment. Comments are plain strings, newest last.
pub fn add_comment(tasks: &mut [Task], id: &str, comment: impl Into<String>) -> Result<()> {
    let task = find_mut(tasks, id)?;
    task.comments.push(comment.into());
    Ok(())
}

pub fn find<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|t| t.id == id)
}

fn find_mut<'a>(tasks: &'a mut [Task], id: &str) -> Result<&'a mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| GoalFlowError::TaskNotFound(id.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        let mut tasks: Vec<Task> = Vec::new();
        let id = add_task(&mut tasks, "Draft report");
        assert_eq!(tasks[0].status, Status::NotStarted);

        assert_eq!(toggle_completed(&mut tasks, &id).unwrap(), Status::Completed);
        assert_eq!(
            toggle_completed(&mut tasks, &id).unwrap(),
            Status::NotStarted
        );
    }

    #[test]
    fn toggle_from_blocked_completes() {
        let mut tasks: Vec<Task> = Vec::new();
        let id = add_task(&mut tasks, "Deploy");
        set_status(&mut tasks, &id, Status::Blocked).unwrap();
        assert_eq!(toggle_completed(&mut tasks, &id).unwrap(), Status::Completed);
    }

    #[test]
    fn comments_append_in_order() {
        let mut tasks: Vec<Task> = Vec::new();
        let id = add_task(&mut tasks, "Interview candidates");
        add_comment(&mut tasks, &id, "Screened five resumes").unwrap();
        add_comment(&mut tasks, &id, "Two on-sites booked").unwrap();
        assert_eq!(
            tasks[0].comments,
            vec!["Screened five resumes", "Two on-sites booked"]
        );
    }

    #[test]
    fn task_not_found() {
        let mut tasks: Vec<Task> = Vec::new();
        assert!(set_status(&mut tasks, "missing", Status::Completed).is_err());
        assert!(find(&tasks, "missing").is_none());
    }

    #[test]
    fn missing_collections_deserialize_empty() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","title":"Bare"}"#).unwrap();
        assert!(task.comments.is_empty());
        assert_eq!(task.status, Status::NotStarted);
        assert_eq!(task.priority, Priority::Medium);
    }
}
