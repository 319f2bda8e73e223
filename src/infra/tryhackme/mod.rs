// TryHackMe infra layer.
// - `tryhackme_client.rs` talks to the public profile API.

#[path = "tryhackme_client.rs"]
pub mod tryhackme_client;

pub use tryhackme_client::TryHackMeClient;
