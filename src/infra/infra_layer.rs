// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "tryhackme/mod.rs"]
pub mod tryhackme;

#[path = "assets/mod.rs"]
pub mod assets;
