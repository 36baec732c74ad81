//! CLI library components for the match-report harvester.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
