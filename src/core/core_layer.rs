// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "stats/mod.rs"]
pub mod stats;

#[path = "badge/mod.rs"]
pub mod badge;
