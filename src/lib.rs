//! Placeholder images for test fixtures.
//!
//! [`Placeholder`] builds URLs for the placehold.co service and can download
//! the rendered image to disk:
//!
//! ```no_run
//! use placehold::adapters::live::http::{HttpFetcher, DEFAULT_TIMEOUT};
//! use placehold::{DownloadOutcome, ImageRequest, Placeholder};
//!
//! # async fn demo() -> Result<(), placehold::ImageError> {
//! let placeholder = Placeholder::new(Some(Box::new(HttpFetcher::new(DEFAULT_TIMEOUT)?)));
//! let request = ImageRequest::new(320, 240).word("hello").format("png");
//!
//! println!("{}", placeholder.image_url(&request)?);
//! if let DownloadOutcome::Saved(path) = placeholder.image(&request, None, true).await? {
//!     println!("saved to {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod params;
pub mod ports;

pub use error::ImageError;
pub use generator::{DownloadOutcome, FailureReason, ImageRequest, Placeholder};
pub use params::ImageFormat;
