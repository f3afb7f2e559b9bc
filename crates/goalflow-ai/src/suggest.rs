use chrono::Utc;
use goalflow_core::suggest::{fallback_suggestion, GoalSuggestion};

use crate::client::{ChatClient, ChatMessage};
use crate::Result;

// ─── Prompts ──────────────────────────────────────────────────────────────

const SUGGESTION_SYSTEM_PROMPT: &str = "You are an expert goal-setting assistant that \
helps create structured, actionable goals with clear subgoals and tasks.";

const SUGGESTION_FORMAT: &str = r#"The response should be a JSON object with the following structure:
{
  "title": "A specific, measurable goal title",
  "description": "Detailed description of the goal",
  "subgoals": [
    {
      "title": "Subgoal title",
      "description": "Subgoal description",
      "tasks": [
        {
          "title": "Task title",
          "description": "Task description",
          "estimated_duration": "Numeric value representing days needed to complete this task"
        }
      ]
    }
  ],
  "suggestedTags": ["tag1", "tag2"],
  "suggestedDeadline": "YYYY-MM-DD" (a reasonable deadline for this goal)
}

Make the goal SMART (Specific, Measurable, Achievable, Relevant, Time-bound).
Include 2-3 subgoals, each with 2-4 tasks.
For each task, provide an estimated_duration as a numeric value representing the number of days needed to complete the task.
Suggest 3-5 relevant tags.
Set a reasonable deadline based on the scope of the goal."#;

fn suggestion_prompt(user_input: &str) -> String {
    format!("Generate a structured goal based on this input: \"{user_input}\"\n\n{SUGGESTION_FORMAT}")
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Draft a goal tree from free-form input.
///
/// Never fails: any error along the way (transport, non-2xx status, a reply
/// that is not the requested JSON) logs a warning and degrades to the
/// deterministic [`fallback_suggestion`] skeleton, so callers always have
/// something to show.
pub fn suggest_goal(client: &ChatClient, user_input: &str) -> GoalSuggestion {
    match request_suggestion(client, user_input) {
        Ok(suggestion) => suggestion,
        Err(err) => {
            tracing::warn!(error = %err, "goal suggestion failed, using fallback");
            fallback_suggestion(user_input, Utc::now().date_naive())
        }
    }
}

fn request_suggestion(client: &ChatClient, user_input: &str) -> Result<GoalSuggestion> {
    let messages = vec![
        ChatMessage::system(SUGGESTION_SYSTEM_PROMPT),
        ChatMessage::user(suggestion_prompt(user_input)),
    ];
    let content = client.complete(messages, client.config().max_tokens, true)?;
    let suggestion = serde_json::from_str(&content)?;
    Ok(suggestion)
}

// ─── Tests ────────────────────────────────────────────────────────────────
