//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system. Implementations live in `src/adapters/`.

pub mod image_fetcher;
pub mod random_source;

pub use image_fetcher::{FetchedImage, ImageFetcher};
pub use random_source::{ColorSource, WordSource};
