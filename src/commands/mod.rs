//! Command implementations for the draft-graph CLI

pub mod common;
pub mod render;
pub mod roster;
pub mod teammates;
