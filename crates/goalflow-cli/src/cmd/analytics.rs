use anyhow::Context;
use goalflow_core::analytics::{
    at_risk_count, completion_rate, department_rollup, recent_goals, status_counts,
    status_distribution, task_status_counts, team_performance, DepartmentProgress, StatusCounts,
    StatusSlice, TaskStatusCounts,
};
use goalflow_core::config::Config;
use goalflow_core::goal::parse_goals;
use goalflow_core::progress::synthetic_progress;
use serde::Serialize;

use crate::input::read_input;
use crate::output::{print_json, print_table};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RecentGoal {
    id: String,
    title: String,
    status: String,
    progress: u8,
}

#[derive(Serialize)]
struct AnalyticsReport {
    goals: StatusCounts,
    completion_rate: u8,
    team_performance: u8,
    at_risk: usize,
    tasks: TaskStatusCounts,
    distribution: Vec<StatusSlice>,
    departments: Vec<DepartmentProgress>,
    recent: Vec<RecentGoal>,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(input: &str, config: &Config, json: bool) -> anyhow::Result<()> {
    let data = read_input(input)?;
    let goals = parse_goals(&data).context("failed to parse goals export")?;

    let report = AnalyticsReport {
        goals: status_counts(&goals),
        completion_rate: completion_rate(&goals),
        team_performance: team_performance(&goals),
        at_risk: at_risk_count(&goals),
        tasks: task_status_counts(&goals),
        distribution: status_distribution(&goals),
        departments: department_rollup(
            &goals,
            &config.departments.rules,
            &config.departments.fallback,
        ),
        recent: recent_goals(&goals, config.recent_limit)
            .into_iter()
            .map(|g| RecentGoal {
                id: g.id.clone(),
                title: g.title.clone(),
                status: g.status.to_string(),
                progress: synthetic_progress(&g.status),
            })
            .collect(),
    };

    if json {
        return print_json(&report);
    }
    show(&report);
    Ok(())
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

fn show(report: &AnalyticsReport) {
    let g = &report.goals;
    println!(
        "Goals: {} total ({} completed, {} in progress, {} at risk, {} not started, {} blocked, {} other)",
        g.total, g.completed, g.in_progress, g.at_risk, g.not_started, g.blocked, g.other
    );
    println!("Completion rate:  {:>3}%", report.completion_rate);
    println!("Team performance: {:>3}%", report.team_performance);
    println!("At risk:          {:>3}", report.at_risk);

    let t = &report.tasks;
    println!(
        "Tasks: {} total ({} completed, {} in progress, {} blocked)",
        t.total, t.completed, t.in_progress, t.blocked
    );

    if !report.distribution.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = report
            .distribution
            .iter()
            .map(|s| vec![s.name.clone(), s.value.to_string(), s.color.clone()])
            .collect();
        print_table(&["STATUS", "GOALS", "COLOR"], &rows);
    }

    if !report.departments.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = report
            .departments
            .iter()
            .map(|d| {
                vec![
                    d.name.clone(),
                    d.total.to_string(),
                    d.completed.to_string(),
                    d.in_progress.to_string(),
                    format!("{}%", d.progress),
                ]
            })
            .collect();
        print_table(
            &["DEPARTMENT", "GOALS", "COMPLETED", "IN PROGRESS", "PROGRESS"],
            &rows,
        );
    }

    if !report.recent.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = report
            .recent
            .iter()
            .map(|r| vec![r.title.clone(), r.status.clone(), format!("{}%", r.progress)])
            .collect();
        print_table(&["RECENT", "STATUS", "PROGRESS"], &rows);
    }
}
