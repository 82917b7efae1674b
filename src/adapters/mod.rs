//! Adapter implementations for port traits.
//!
//! - `live/` — Real HTTP transport and random sources
//! - `recording/` — Record fetches to cassettes
//! - `replaying/` — Replay fetches from cassettes

pub mod live;
pub mod recording;
pub mod replaying;
