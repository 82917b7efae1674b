//! Record/replay of fetches for deterministic tests and offline runs.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
