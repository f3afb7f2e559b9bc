use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoalFlowError {
    #[error("sub-goal not found: {0}")]
    SubGoalNotFound(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("member already on team: {0}")]
    DuplicateMember(String),

    #[error("cannot remove the last owner of team '{0}'")]
    LastOwner(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid priority: {0}")]
    InvalidPriority(String),

    #[error("invalid goal type: {0}")]
    InvalidGoalType(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GoalFlowError>;
