use anyhow::Context;
use chrono::{DateTime, Utc};
use goalflow_ai::{summarize_week, ChatClient};
use goalflow_core::config::Config;
use goalflow_core::goal::{parse_goals, Goal, WeeklySummary};
use goalflow_core::summary::{
    collect_task_comments, week_number, FALLBACK_SUMMARY, NO_COMMENTS_SUMMARY,
};

use crate::input::read_input;
use crate::output::print_json;

pub fn run(
    input: &str,
    goal_ref: &str,
    offline: bool,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let data = read_input(input)?;
    let goals = parse_goals(&data).context("failed to parse goals export")?;
    let goal = super::find_goal(&goals, goal_ref)?;
    let now = Utc::now();

    let summary = if offline {
        offline_summary(goal, now)
    } else {
        match ChatClient::from_env(config.ai.clone()) {
            Ok(client) => summarize_week(&client, goal, now),
            Err(err) => {
                tracing::warn!(error = %err, "AI client unavailable, using fallback");
                stamp(FALLBACK_SUMMARY, goal, now)
            }
        }
    };

    if json {
        return print_json(&summary);
    }
    println!("Week {}", summary.week_number);
    println!("{}", summary.text);
    Ok(())
}

/// Offline rendition: the no-comments text when there is nothing to digest,
/// the fixed fallback text otherwise. Same shape as the online path.
fn offline_summary(goal: &Goal, now: DateTime<Utc>) -> WeeklySummary {
    let text = if collect_task_comments(goal).is_empty() {
        NO_COMMENTS_SUMMARY
    } else {
        FALLBACK_SUMMARY
    };
    stamp(text, goal, now)
}

fn stamp(text: &str, goal: &Goal, now: DateTime<Utc>) -> WeeklySummary {
    WeeklySummary {
        text: text.to_string(),
        created_at: now,
        week_number: week_number(now, goal.created_at),
    }
}
