//! Shared building blocks for the puzzle solutions

pub mod dp_cache;
pub mod grid;
