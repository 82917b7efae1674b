//! Replaying adapter for the `ImageFetcher` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::ImageError;
use crate::ports::image_fetcher::{FetchFuture, FetchedImage, ImageFetcher};

/// Serves recorded fetch results from a cassette.
pub struct ReplayingImageFetcher {
    replayer: Option<Arc<Mutex<CassetteReplayer>>>,
}

impl ReplayingImageFetcher {
    /// Create a replaying fetcher backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer: Some(replayer) }
    }
}

impl ImageFetcher for ReplayingImageFetcher {
    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        tracing::debug!(%url, "replaying fetch");
        let result = next_output(self.replayer.as_ref(), "image_fetcher", "fetch")
            .and_then(replay_result::<FetchedImage>)
            .map_err(|e| ImageError::Config(format!("Replay failed: {e}")));
        Box::pin(async move { result })
    }
}
