use chrono::{DateTime, Utc};
use goalflow_core::goal::{Goal, WeeklySummary};
use goalflow_core::summary::{
    collect_task_comments, week_number, FALLBACK_SUMMARY, NO_COMMENTS_SUMMARY, UNAVAILABLE_SUMMARY,
};

use crate::client::{ChatClient, ChatMessage};
use crate::{AiError, Result};

// ─── Prompts ──────────────────────────────────────────────────────────────

const SUMMARY_SYSTEM_PROMPT: &str = "You are an expert project manager who provides \
concise, insightful summaries of weekly progress.";

const SUMMARY_FOCUS: &str = "Focus on:\n\
1. Key actions taken (based on comments)\n\
2. Notable progress or blockers\n\
3. Overall sentiment or tone from the comments\n\
4. What has been achieved this week\n\
5. Any ongoing tasks and items pending attention\n\n\
Keep it under 200 words and make it human-readable.";

fn summary_prompt(goal_title: &str, comment_blocks: &[String]) -> String {
    format!(
        "Generate a concise weekly summary for the goal \"{goal_title}\" based on these task comments:\n\n{}\n\n{SUMMARY_FOCUS}",
        comment_blocks.join("\n\n")
    )
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Produce the check-in digest for a goal, stamped with the goal's own week
/// number relative to its creation date.
///
/// A goal with no task comments short-circuits to [`NO_COMMENTS_SUMMARY`]
/// without touching the endpoint. An empty model reply reads
/// [`UNAVAILABLE_SUMMARY`]; any other failure logs a warning and reads
/// [`FALLBACK_SUMMARY`]. The caller always gets a summary back.
pub fn summarize_week(client: &ChatClient, goal: &Goal, now: DateTime<Utc>) -> WeeklySummary {
    WeeklySummary {
        text: summary_text(client, goal),
        created_at: now,
        week_number: week_number(now, goal.created_at),
    }
}

fn summary_text(client: &ChatClient, goal: &Goal) -> String {
    let blocks = collect_task_comments(goal);
    if blocks.is_empty() {
        return NO_COMMENTS_SUMMARY.to_string();
    }
    match request_summary(client, &goal.title, &blocks) {
        Ok(text) => text,
        Err(AiError::EmptyReply) => UNAVAILABLE_SUMMARY.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, goal = %goal.title, "weekly summary failed, using fallback");
            FALLBACK_SUMMARY.to_string()
        }
    }
}

fn request_summary(client: &ChatClient, goal_title: &str, blocks: &[String]) -> Result<String> {
    let messages = vec![
        ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
        ChatMessage::user(summary_prompt(goal_title, blocks)),
    ];
    client.complete(messages, client.config().summary_max_tokens, false)
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_joins_blocks_with_blank_lines() {
        let blocks = vec![
            "Task: A\nComments:\nfirst".to_string(),
            "Task: B\nComments:\nsecond".to_string(),
        ];
        let prompt = summary_prompt("Launch", &blocks);
        assert!(prompt.starts_with(
            "Generate a concise weekly summary for the goal \"Launch\" based on these task comments:"
        ));
        assert!(prompt.contains("first\n\nTask: B"));
        assert!(prompt.ends_with("Keep it under 200 words and make it human-readable."));
    }
}
