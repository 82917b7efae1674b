//! Service context that picks the transport for the current run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::http::HttpFetcher;
use crate::adapters::recording::image_fetcher::RecordingImageFetcher;
use crate::adapters::replaying::image_fetcher::ReplayingImageFetcher;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::ImageError;
use crate::generator::Placeholder;
use crate::ports::ImageFetcher;

/// Environment variable naming a cassette to replay instead of using the network.
pub const REPLAY_ENV: &str = "PLACEHOLD_REPLAY";
/// Environment variable that turns on recording (`1` or `true`).
pub const RECORD_ENV: &str = "PLACEHOLD_REC";

/// Bundles the transport used by a [`Placeholder`].
pub struct ServiceContext {
    /// Image fetcher port, `None` when no HTTP transport could be set up.
    pub fetcher: Option<Box<dyn ImageFetcher>>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context. A client that fails to initialize leaves the
    /// context without a transport.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        let fetcher: Option<Box<dyn ImageFetcher>> = match HttpFetcher::new(config.timeout()) {
            Ok(f) => Some(Box::new(f)),
            Err(e) => {
                tracing::warn!("HTTP transport unavailable: {e}");
                None
            }
        };
        Self { fetcher }
    }

    /// Create a context with no transport at all.
    #[must_use]
    pub fn offline() -> Self {
        Self { fetcher: None }
    }

    /// Create a recording context that wraps the live fetcher with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live transport cannot be initialized.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), ImageError> {
        let live = Self::live(config).fetcher.ok_or(ImageError::TransportUnavailable)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".placehold/cassettes")
            .join(&timestamp)
            .join("image_fetcher.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-image_fetcher"),
            get_commit_hash(),
        )));

        let fetcher = RecordingImageFetcher::new(live, Arc::clone(&recorder));

        Ok((Self { fetcher: Some(Box::new(fetcher)) }, RecordingSession { recorder }))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, ImageError> {
        let replayer = Arc::new(Mutex::new(load_cassette(path)?));
        Ok(Self { fetcher: Some(Box::new(ReplayingImageFetcher::new(replayer))) })
    }

    /// Choose replay, record, or live mode from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected mode cannot be set up.
    pub fn from_env(config: &Config) -> Result<(Self, Option<RecordingSession>), ImageError> {
        let replay_path = std::env::var(REPLAY_ENV).ok().filter(|v| !v.is_empty());
        let is_recording = std::env::var(RECORD_ENV).is_ok_and(|v| v == "true" || v == "1");

        if let Some(ref cassette_path) = replay_path {
            tracing::info!("replaying from {cassette_path}");
            Ok((Self::replaying(Path::new(cassette_path))?, None))
        } else if is_recording {
            tracing::info!("recording mode enabled");
            let (ctx, session) = Self::recording(config)?;
            Ok((ctx, Some(session)))
        } else {
            Ok((Self::live(config), None))
        }
    }

    /// Build a [`Placeholder`] that uses this context's transport and the
    /// configured service settings.
    #[must_use]
    pub fn into_placeholder(self, config: &Config) -> Placeholder {
        Placeholder::new(self.fetcher)
            .with_base_url(config.base_url())
            .with_server_addr(config.server_addr())
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use crate::ports::image_fetcher::{FetchFuture, FetchedImage};

    struct NotFound;

    impl ImageFetcher for NotFound {
        fn fetch(&self, _url: &str) -> FetchFuture<'_> {
            Box::pin(async {
                Ok(FetchedImage { status: 404, content_type: None, data: b"Not Found".to_vec() })
            })
        }
    }

    #[tokio::test]
    async fn recording_session_writes_fetches_to_cassette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cassettes").join("image_fetcher.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "session", "abc")));
        let fetcher = RecordingImageFetcher::new(Box::new(NotFound), Arc::clone(&recorder));

        let url = "https://placehold.co/8x8/CCCCCC/000000/png";
        let fetched = fetcher.fetch(url).await.unwrap();
        assert_eq!(fetched.status, 404);

        // Finishing needs the only reference to the recorder.
        drop(fetcher);
        let written = RecordingSession { recorder }.finish().unwrap();
        assert_eq!(written, path);

        let cassette: Cassette =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, "image_fetcher");
        assert_eq!(interaction.method, "fetch");
        assert_eq!(interaction.input["url"], url);
        assert_eq!(interaction.output["Ok"]["status"], 404);
    }

    #[test]
    fn recording_session_refuses_while_shared() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            dir.path().join("c.yaml"),
            "session",
            "abc",
        )));
        let _fetcher = RecordingImageFetcher::new(Box::new(NotFound), Arc::clone(&recorder));

        let err = RecordingSession { recorder }.finish().unwrap_err();
        assert!(err.contains("still has references"));
        assert!(!dir.path().join("c.yaml").exists());
    }

    #[test]
    fn offline_context_has_no_transport() {
        assert!(ServiceContext::offline().fetcher.is_none());
    }

    #[test]
    fn live_context_has_transport() {
        assert!(ServiceContext::live(&Config::default()).fetcher.is_some());
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let err = ServiceContext::replaying(Path::new("/nonexistent/c.yaml")).err().unwrap();
        assert!(matches!(err, ImageError::Config(_)));
    }

    #[test]
    fn placeholder_uses_configured_base_url() {
        let mut config = Config::default();
        config.service.base_url = "http://127.0.0.1:1".into();
        let placeholder = ServiceContext::offline().into_placeholder(&config);
        let url = placeholder
            .image_url(&crate::generator::ImageRequest::new(2, 2).grayscale(true).randomize(false))
            .unwrap();
        assert_eq!(url, "http://127.0.0.1:1/2x2/CCCCCC/000000/jpg");
    }
}
