use anyhow::Context;
use chrono::Utc;
use goalflow_ai::{suggest_goal, ChatClient};
use goalflow_core::config::Config;
use goalflow_core::suggest::{fallback_suggestion, GoalSuggestion};
use goalflow_core::types::GoalType;

use crate::output::print_json;

pub fn run(
    text: &str,
    offline: bool,
    goal_type: &str,
    adopt: bool,
    config: &Config,
    json: bool,
) -> anyhow::Result<()> {
    let goal_type: GoalType = goal_type
        .parse()
        .context("goal type must be 'individual' or 'team'")?;

    let suggestion = if offline {
        fallback_suggestion(text, Utc::now().date_naive())
    } else {
        match ChatClient::from_env(config.ai.clone()) {
            Ok(client) => suggest_goal(&client, text),
            Err(err) => {
                tracing::warn!(error = %err, "AI client unavailable, using fallback");
                fallback_suggestion(text, Utc::now().date_naive())
            }
        }
    };

    if adopt {
        // The materialized goal is itself an export record, so always JSON.
        let goal = suggestion.into_goal(goal_type);
        return print_json(&goal);
    }
    if json {
        return print_json(&suggestion);
    }
    show(&suggestion);
    Ok(())
}

fn show(suggestion: &GoalSuggestion) {
    println!("{}", suggestion.title);
    println!("  {}", suggestion.description);
    println!(
        "  deadline: {}  tags: {}",
        suggestion.suggested_deadline,
        suggestion.tags.join(", ")
    );
    for sub in &suggestion.subgoals {
        println!();
        println!("  {}", sub.title);
        for task in &sub.tasks {
            match task.estimated_duration.as_deref() {
                Some(days) => println!("    - {} ({days}d)", task.title),
                None => println!("    - {}", task.title),
            }
        }
    }
}
