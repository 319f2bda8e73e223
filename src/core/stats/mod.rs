pub mod stats_extract;
pub mod stats_models;
pub mod stats_source;

pub use stats_models::{PlayerStats, StatValue, StatsError, StatsResult};
pub use stats_source::StatsSource;
