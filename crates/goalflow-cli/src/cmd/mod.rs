pub mod analytics;
pub mod classify;
pub mod progress;
pub mod suggest;
pub mod summary;

use goalflow_core::goal::Goal;

/// Select a goal by id, falling back to a case-insensitive title match so
/// exports can be queried without copying UUIDs around.
pub(crate) fn find_goal<'a>(goals: &'a [Goal], needle: &str) -> anyhow::Result<&'a Goal> {
    if let Some(goal) = goals.iter().find(|g| g.id == needle) {
        return Ok(goal);
    }
    let lowered = needle.to_lowercase();
    goals
        .iter()
        .find(|g| g.title.to_lowercase() == lowered)
        .ok_or_else(|| anyhow::anyhow!("no goal matching '{needle}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalflow_core::types::GoalType;

    #[test]
    fn find_goal_prefers_id_then_title() {
        let by_id = Goal::new("Alpha", GoalType::Team);
        let id = by_id.id.clone();
        let by_title = Goal::new("Beta", GoalType::Team);
        let goals = vec![by_id, by_title];

        assert_eq!(find_goal(&goals, &id).unwrap().title, "Alpha");
        assert_eq!(find_goal(&goals, "beta").unwrap().title, "Beta");
        assert!(find_goal(&goals, "gamma").is_err());
    }
}
