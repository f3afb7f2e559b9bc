pub mod analytics;
pub mod badge;
pub mod config;
pub mod error;
pub mod goal;
pub mod io;
pub mod progress;
pub mod suggest;
pub mod summary;
pub mod task;
pub mod team;
pub mod types;

pub use error::{GoalFlowError, Result};
