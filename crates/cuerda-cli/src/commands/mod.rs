//! CLI command implementations.

pub mod common;
pub mod devices;
pub mod fretboard;
pub mod play;
pub mod positions;
pub mod render;
pub mod table;
