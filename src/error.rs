use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the pipeline.
///
/// Only `InvalidInput` is fatal to a run; every other variant is scoped to a
/// single site and is logged rather than propagated across the batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The site list was empty or contained an unparseable URL. Raised before
    /// any task is launched.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure while fetching a page.
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-200 status.
    #[error("unexpected status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// WebDriver connect, navigation or capture failure.
    #[error("screenshot render failed for {url}: {reason}")]
    Render { url: String, reason: String },

    /// A page yielded zero candidate images.
    #[error("no candidate images found on {url}")]
    NoImagesFound { url: String },

    /// The selected source image could not be downloaded.
    #[error("failed to download image {url}: {reason}")]
    ImageDownload { url: String, reason: String },

    /// The downloaded bytes were not a decodable image.
    #[error("failed to decode image from {url}: {reason}")]
    ImageDecode { url: String, reason: String },

    /// JPEG encoding of the processed thumbnail failed.
    #[error("failed to encode thumbnail: {reason}")]
    ImageEncode { reason: String },

    /// A spawned site task was cancelled before it completed.
    #[error("site task for {url} was cancelled")]
    TaskCancelled { url: String },

    /// Disk write of a finished artifact failed.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
