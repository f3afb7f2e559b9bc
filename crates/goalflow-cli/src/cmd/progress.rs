use anyhow::Context;
use goalflow_core::badge::{classify_status, status_badge};
use goalflow_core::goal::{parse_goals, Goal, SubGoal};
use goalflow_core::progress::{
    completed_task_count, goal_progress, subgoal_progress, summarize, task_count,
};
use serde::Serialize;

use crate::input::read_input;
use crate::output::{print_json, print_table};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SubGoalReport {
    id: String,
    title: String,
    status: String,
    progress: u8,
    tasks_completed: usize,
    tasks_total: usize,
}

#[derive(Serialize)]
struct GoalReport {
    id: String,
    title: String,
    status: String,
    progress: u8,
    subgoals_completed: usize,
    subgoals_total: usize,
    tasks_completed: usize,
    tasks_total: usize,
    subgoals: Vec<SubGoalReport>,
}

fn subgoal_report(sub: &SubGoal) -> SubGoalReport {
    SubGoalReport {
        id: sub.id.clone(),
        title: sub.title.clone(),
        status: sub.status.to_string(),
        progress: subgoal_progress(sub),
        tasks_completed: sub.tasks.iter().filter(|t| t.status.is_completed()).count(),
        tasks_total: sub.tasks.len(),
    }
}

fn goal_report(goal: &Goal) -> GoalReport {
    GoalReport {
        id: goal.id.clone(),
        title: goal.title.clone(),
        status: goal.status.to_string(),
        progress: goal_progress(goal),
        subgoals_completed: goal
            .subgoals
            .iter()
            .filter(|s| s.status.is_completed())
            .count(),
        subgoals_total: goal.subgoals.len(),
        tasks_completed: completed_task_count(goal),
        tasks_total: task_count(goal),
        subgoals: goal.subgoals.iter().map(subgoal_report).collect(),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(input: &str, goal: Option<&str>, json: bool) -> anyhow::Result<()> {
    let data = read_input(input)?;
    let goals = parse_goals(&data).context("failed to parse goals export")?;

    match goal {
        Some(needle) => {
            let goal = super::find_goal(&goals, needle)?;
            let report = goal_report(goal);
            if json {
                return print_json(&report);
            }
            show_detail(goal, &report);
        }
        None => {
            let reports: Vec<GoalReport> = goals.iter().map(goal_report).collect();
            if json {
                return print_json(&reports);
            }
            show_overview(&reports);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

fn show_overview(reports: &[GoalReport]) {
    if reports.is_empty() {
        println!("No goals in export.");
        return;
    }
    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|r| {
            vec![
                r.title.clone(),
                classify_status(&r.status).label,
                format!("{}%", r.progress),
                format!("{}/{}", r.subgoals_completed, r.subgoals_total),
                format!("{}/{}", r.tasks_completed, r.tasks_total),
            ]
        })
        .collect();
    print_table(&["GOAL", "STATUS", "PROGRESS", "SUB-GOALS", "TASKS"], &rows);
}

fn show_detail(goal: &Goal, report: &GoalReport) {
    let badge = status_badge(&goal.status);
    println!("{}  [{}]  {}%", report.title, badge.label, report.progress);
    println!("{}", summarize(goal));

    if report.subgoals.is_empty() {
        return;
    }
    println!();
    let rows: Vec<Vec<String>> = report
        .subgoals
        .iter()
        .map(|s| {
            vec![
                s.title.clone(),
                s.status.clone(),
                format!("{}%", s.progress),
                format!("{}/{}", s.tasks_completed, s.tasks_total),
            ]
        })
        .collect();
    print_table(&["SUB-GOAL", "STATUS", "PROGRESS", "TASKS"], &rows);
}
