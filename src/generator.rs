//! Placeholder image URLs and best-effort downloads.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::adapters::live::random::{LoremWords, RandomColor};
use crate::color::{foreground_for, normalize_hex, GRAYSCALE_BACKGROUND};
use crate::config::DEFAULT_BASE_URL;
use crate::error::ImageError;
use crate::output::{resolve_directory, unique_filename, PartialFile};
use crate::params::{validate_dimensions, ImageFormat, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::ports::{ColorSource, ImageFetcher, WordSource};

/// Parameters for one placeholder image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Add a random word when no explicit word is given.
    pub randomize: bool,
    /// Overlay text. `""` and `"0"` count as absent.
    pub word: Option<String>,
    /// Use a fixed gray background instead of a random color.
    pub grayscale: bool,
    /// One of `jpg`, `jpeg`, `png`, `webp`, `gif`, in any case.
    pub format: String,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            randomize: true,
            word: None,
            grayscale: false,
            format: ImageFormat::default().as_str().to_string(),
        }
    }
}

impl ImageRequest {
    /// A request for the given size with every other field at its default.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Set the overlay text.
    #[must_use]
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    /// Enable or disable the random word.
    #[must_use]
    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Enable or disable the gray background.
    #[must_use]
    pub fn grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Set the image format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Why a download did not produce a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The service answered with something other than 200.
    Status(u16),
    /// The request never completed.
    Transport(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

/// Result of [`Placeholder::image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The image was written; holds the full path or the bare filename.
    Saved(PathBuf),
    /// Nothing was written.
    Failed(FailureReason),
}

impl DownloadOutcome {
    /// The saved path, if the download succeeded.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Saved(p) => Some(p.as_path()),
            Self::Failed(_) => None,
        }
    }

    /// Whether a file was written.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Builds placeholder URLs and downloads them.
///
/// Holds no per-call state: every call picks its own colors, words, and
/// filename.
pub struct Placeholder {
    base_url: String,
    server_addr: Option<String>,
    colors: Box<dyn ColorSource>,
    words: Box<dyn WordSource>,
    fetcher: Option<Box<dyn ImageFetcher>>,
}

impl Placeholder {
    /// Create a generator against the public service with live random sources.
    ///
    /// Without a fetcher, [`image`](Self::image) fails with
    /// [`ImageError::TransportUnavailable`].
    #[must_use]
    pub fn new(fetcher: Option<Box<dyn ImageFetcher>>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            server_addr: None,
            colors: Box::new(RandomColor),
            words: Box::new(LoremWords),
            fetcher,
        }
    }

    /// Point at a different service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Mix a host address into generated filenames.
    #[must_use]
    pub fn with_server_addr(mut self, addr: Option<String>) -> Self {
        self.server_addr = addr;
        self
    }

    /// Replace the background color source.
    #[must_use]
    pub fn with_colors(mut self, colors: Box<dyn ColorSource>) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the overlay word source.
    #[must_use]
    pub fn with_words(mut self, words: Box<dyn WordSource>) -> Self {
        self.words = words;
        self
    }

    /// Build the URL for a placeholder image. Makes no network calls.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidFormat`] for an unknown format and
    /// [`ImageError::InvalidArgument`] for a zero dimension or a malformed
    /// color from the color source.
    pub fn image_url(&self, request: &ImageRequest) -> Result<String, ImageError> {
        let format: ImageFormat = request.format.parse()?;
        validate_dimensions(request.width, request.height)?;

        let background = if request.grayscale {
            GRAYSCALE_BACKGROUND.to_string()
        } else {
            normalize_hex(&self.colors.hex_color())
        };
        let foreground = foreground_for(&background)?;

        let word = match request.word.as_deref().filter(|w| !is_blank_word(w)) {
            Some(w) => Some(w.to_string()),
            None if request.randomize => Some(self.words.word()),
            None => None,
        };

        let mut url = format!(
            "{}/{}x{}/{background}/{foreground}/{format}",
            self.base_url, request.width, request.height
        );
        if let Some(word) = word {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("text", &word)
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        tracing::debug!(%url, "built placeholder url");
        Ok(url)
    }

    /// Download a placeholder image into `dir` (the system temp directory
    /// when `None`).
    ///
    /// Returns the full path when `full_path` is set, otherwise the bare
    /// filename. Anything short of an HTTP 200 yields
    /// [`DownloadOutcome::Failed`] and leaves no file behind.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::Directory`] if the directory is unusable,
    /// [`ImageError::TransportUnavailable`] if no fetcher is configured, and
    /// the errors of [`image_url`](Self::image_url). Local write failures
    /// surface as [`ImageError::Io`].
    pub async fn image(
        &self,
        request: &ImageRequest,
        dir: Option<&Path>,
        full_path: bool,
    ) -> Result<DownloadOutcome, ImageError> {
        let dir = resolve_directory(dir)?;
        let format: ImageFormat = request.format.parse()?;
        let filename = unique_filename(self.server_addr.as_deref(), format);
        let url = self.image_url(request)?;

        let fetcher = self.fetcher.as_deref().ok_or(ImageError::TransportUnavailable)?;

        let mut partial = PartialFile::create(dir.join(&filename)).map_err(|e| {
            ImageError::Directory { path: dir.clone(), reason: e.to_string() }
        })?;
        tracing::debug!(path = %partial.path().display(), %url, "downloading placeholder");

        let fetched = match fetcher.fetch(&url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!(%url, "placeholder download failed: {e}");
                return Ok(DownloadOutcome::Failed(FailureReason::Transport(e.to_string())));
            }
        };

        if fetched.status != 200 {
            tracing::warn!(%url, status = fetched.status, "placeholder service refused request");
            return Ok(DownloadOutcome::Failed(FailureReason::Status(fetched.status)));
        }

        tracing::debug!(
            content_type = fetched.content_type.as_deref().unwrap_or("unknown"),
            bytes = fetched.data.len(),
            "placeholder received"
        );
        partial.write_all(&fetched.data)?;
        let saved = partial.commit()?;

        Ok(DownloadOutcome::Saved(if full_path { saved } else { PathBuf::from(filename) }))
    }
}

/// Words the host's data generator treats as "no word given".
fn is_blank_word(word: &str) -> bool {
    word.is_empty() || word == "0"
}
