//! CLI library components for the HIS production report.

pub mod cli;
pub mod commands;
pub mod export;
pub mod logging;
pub mod summary;
pub mod types;
