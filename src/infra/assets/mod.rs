// Asset output layer.
// - `file_store.rs` writes the badge SVG and stats snapshot to disk.

#[path = "file_store.rs"]
pub mod file_store;

pub use file_store::AssetFileStore;
