//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_fetcher;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;

/// Failure to produce a replayed value.
pub(crate) type ReplayError = Box<dyn std::error::Error + Send + Sync>;

/// Retrieve the next recorded output for a given port and method.
///
/// # Errors
///
/// Returns an error if no cassette is configured or the cassette has no more
/// interactions for this port/method pair.
pub(crate) fn next_output(
    replayer: Option<&Arc<Mutex<CassetteReplayer>>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, ReplayError> {
    let replayer = replayer.ok_or_else(|| {
        format!("no cassette configured for port '{port}'; configure one or use live mode")
    })?;
    let mut guard = replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
    Ok(guard.next_interaction(port, method)?.output.clone())
}

/// Deserialize a replayed output as `Result<T, Error>`.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, ReplayError> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let msg = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(msg.into());
    }
    let value = output.get("Ok").or_else(|| output.get("ok")).cloned().unwrap_or(output);
    serde_json::from_value(value).map_err(Into::into)
}
