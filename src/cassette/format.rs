//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session: every port call made while recording, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When the session finished.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made from, or `"unknown"`.
    pub commit: String,
    /// Recorded calls.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// One port call and its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the session, starting at zero.
    pub seq: u64,
    /// Port name, e.g. `"image_fetcher"`.
    pub port: String,
    /// Method on the port, e.g. `"fetch"`.
    pub method: String,
    /// Call arguments.
    pub input: serde_json::Value,
    /// `{"Ok": ...}` or `{"Err": "message"}`.
    pub output: serde_json::Value,
}
