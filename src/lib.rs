//! Read-only link launcher.
//! Loads items.json, builds one tile per entry (or a single empty-state tile),
//! and draws the tiles through an HTML or terminal backend.

pub mod config;
pub mod entry;
pub mod loader;
pub mod navigate;
pub mod render;
pub mod text;
pub mod tiles;
