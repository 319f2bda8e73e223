pub mod badge_job;
pub mod badge_models;
pub mod badge_renderer;
pub mod badge_store;

pub use badge_job::{BadgeError, BadgeJob, RunOutcome};
pub use badge_models::{BadgeConfig, StatsSnapshot};
pub use badge_store::{BadgeStore, StoreError};
