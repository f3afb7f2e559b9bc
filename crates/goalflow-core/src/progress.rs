use crate::goal::{Goal, SubGoal};
use crate::types::Status;

/// `round(100 * part / whole)` in integer math, halves away from zero.
/// Returns 0 when `whole` is 0, so callers never divide by zero.
pub fn ratio_percent(part: usize, whole: usize) -> u8 {
    div_round(part * 100, whole) as u8
}

pub(crate) fn div_round(numer: usize, denom: usize) -> usize {
    if denom == 0 {
        return 0;
    }
    (numer * 2 + denom) / (denom * 2)
}

/// Percentage of completed tasks in a sub-goal.
///
/// A sub-goal with no tasks reports 100 when its own status is completed and
/// 0 otherwise. Once tasks exist, only the task ratio counts; the sub-goal's
/// own status is ignored.
pub fn subgoal_progress(sub: &SubGoal) -> u8 {
    if sub.tasks.is_empty() {
        return if sub.status.is_completed() { 100 } else { 0 };
    }
    let completed = sub.tasks.iter().filter(|t| t.status.is_completed()).count();
    ratio_percent(completed, sub.tasks.len())
}

/// Percentage of sub-goals whose status is completed.
///
/// A goal with no sub-goals reports 0 regardless of its own status. There is
/// deliberately no completed shortcut here, unlike [`subgoal_progress`]: the
/// asymmetry is long-standing dashboard behavior, and changing it would
/// silently move every historical number.
pub fn goal_progress(goal: &Goal) -> u8 {
    let completed = goal
        .subgoals
        .iter()
        .filter(|s| s.status.is_completed())
        .count();
    ratio_percent(completed, goal.subgoals.len())
}

/// Total tasks across every sub-goal. Missing task lists count zero.
pub fn task_count(goal: &Goal) -> usize {
    goal.subgoals.iter().map(|s| s.tasks.len()).sum()
}

pub fn completed_task_count(goal: &Goal) -> usize {
    goal.subgoals
        .iter()
        .flat_map(|s| &s.tasks)
        .filter(|t| t.status.is_completed())
        .count()
}

/// Coarse stand-in percentage for list rows where the sub-goal tree is not
/// loaded: completed 100, in progress 70, at risk 40, everything else 10.
/// Display-only; never a substitute for [`goal_progress`] once children are
/// present.
pub fn synthetic_progress(status: &Status) -> u8 {
    match status {
        Status::Completed => 100,
        Status::InProgress => 70,
        Status::AtRisk => 40,
        _ => 10,
    }
}

/// One-line digest: "2/4 sub-goals completed, 5/12 tasks done"
pub fn summarize(goal: &Goal) -> String {
    let sub_total = goal.subgoals.len();
    let sub_done = goal
        .subgoals
        .iter()
        .filter(|s| s.status.is_completed())
        .count();
    let tasks = task_count(goal);
    let tasks_done = completed_task_count(goal);
    format!("{sub_done}/{sub_total} sub-goals completed, {tasks_done}/{tasks} tasks done")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use crate::types::GoalType;

    fn sub_with_tasks(completed: usize, total: usize) -> SubGoal {
        let mut sub = SubGoal::new("sub");
        for i in 0..total {
            let mut task = Task::new(format!("task {i}"));
            if i < completed {
                task.status = Status::Completed;
            }
            sub.tasks.push(task);
        }
        sub
    }

    #[test]
    fn empty_subgoal_follows_own_status() {
        let mut sub = SubGoal::new("empty");
        assert_eq!(subgoal_progress(&sub), 0);
        sub.status = Status::Completed;
        assert_eq!(subgoal_progress(&sub), 100);
        sub.status = Status::from_wire("archived");
        assert_eq!(subgoal_progress(&sub), 0);
    }

    #[test]
    fn subgoal_ratio_rounds_half_up() {
        assert_eq!(subgoal_progress(&sub_with_tasks(1, 3)), 33);
        assert_eq!(subgoal_progress(&sub_with_tasks(1, 2)), 50);
        assert_eq!(subgoal_progress(&sub_with_tasks(2, 3)), 67);
        assert_eq!(subgoal_progress(&sub_with_tasks(3, 8)), 38);
        assert_eq!(subgoal_progress(&sub_with_tasks(0, 5)), 0);
        assert_eq!(subgoal_progress(&sub_with_tasks(5, 5)), 100);
    }

    #[test]
    fn subgoal_with_tasks_ignores_own_status() {
        let mut sub = sub_with_tasks(0, 4);
        sub.status = Status::Completed;
        assert_eq!(subgoal_progress(&sub), 0);
    }

    #[test]
    fn goal_progress_counts_completed_subgoals() {
        let mut goal = Goal::new("Launch", GoalType::Team);
        let mut done = sub_with_tasks(4, 4);
        done.status = Status::Completed;
        goal.subgoals.push(done);
        goal.subgoals.push(sub_with_tasks(1, 4));

        assert_eq!(goal_progress(&goal), 50);
        assert_eq!(subgoal_progress(&goal.subgoals[0]), 100);
        assert_eq!(subgoal_progress(&goal.subgoals[1]), 25);
    }

    #[test]
    fn goal_without_subgoals_is_zero_even_when_completed() {
        let mut goal = Goal::new("Legacy", GoalType::Individual);
        goal.status = Status::Completed;
        assert_eq!(goal_progress(&goal), 0);
    }

    #[test]
    fn goal_progress_rounds() {
        let mut goal = Goal::new("Thirds", GoalType::Team);
        let mut done = SubGoal::new("a");
        done.status = Status::Completed;
        goal.subgoals.push(done);
        goal.subgoals.push(SubGoal::new("b"));
        goal.subgoals.push(SubGoal::new("c"));
        assert_eq!(goal_progress(&goal), 33);
    }

    #[test]
    fn task_counts_span_subgoals() {
        let mut goal = Goal::new("Counts", GoalType::Team);
        goal.subgoals.push(sub_with_tasks(1, 3));
        goal.subgoals.push(sub_with_tasks(2, 2));
        goal.subgoals.push(SubGoal::new("empty"));
        assert_eq!(task_count(&goal), 5);
        assert_eq!(completed_task_count(&goal), 3);
    }

    #[test]
    fn synthetic_progress_mapping() {
        assert_eq!(synthetic_progress(&Status::Completed), 100);
        assert_eq!(synthetic_progress(&Status::InProgress), 70);
        assert_eq!(synthetic_progress(&Status::from_wire("on_track")), 70);
        assert_eq!(synthetic_progress(&Status::AtRisk), 40);
        assert_eq!(synthetic_progress(&Status::NotStarted), 10);
        assert_eq!(synthetic_progress(&Status::Blocked), 10);
        assert_eq!(synthetic_progress(&Status::from_wire("archived")), 10);
    }

    #[test]
    fn progress_is_idempotent() {
        let mut goal = Goal::new("Stable", GoalType::Team);
        goal.subgoals.push(sub_with_tasks(1, 3));
        let first = (goal_progress(&goal), subgoal_progress(&goal.subgoals[0]));
        let second = (goal_progress(&goal), subgoal_progress(&goal.subgoals[0]));
        assert_eq!(first, second);
    }

    #[test]
    fn summarize_reads_cleanly() {
        let mut goal = Goal::new("Digest", GoalType::Team);
        let mut done = sub_with_tasks(3, 3);
        done.status = Status::Completed;
        goal.subgoals.push(done);
        goal.subgoals.push(sub_with_tasks(1, 4));
        assert_eq!(summarize(&goal), "1/2 sub-goals completed, 4/7 tasks done");
    }
}
