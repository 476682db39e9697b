use crate::error::PipelineError;
use crate::extract::ImageSource;
use serde::Serialize;
use std::path::PathBuf;

/// A cropped thumbnail written to the output directory
#[derive(Debug, Clone, Serialize)]
pub struct ImageArtifact {
    /// URL of the page the image was taken from
    pub page_url: String,

    /// Path of the JPEG on disk
    pub path: PathBuf,

    /// Bare filename of the JPEG
    pub filename: String,

    /// Width of the saved thumbnail in pixels
    pub width: u32,

    /// Height of the saved thumbnail in pixels
    pub height: u32,

    /// URL the source image was downloaded from
    pub source_url: String,

    /// How the source image was discovered on the page
    pub source: ImageSource,
}

/// Everything produced (or attempted) for one site in text mode
///
/// The screenshot and the text artifact are independent results: either one
/// failing leaves the other intact.
#[derive(Debug)]
pub struct TextOutcome {
    pub screenshot: Result<PathBuf, PipelineError>,
    pub artifact: Result<PathBuf, PipelineError>,
}

/// Per-site result of a batch run
#[derive(Debug)]
pub enum SiteOutcome {
    Text(TextOutcome),
    Image(Result<ImageArtifact, PipelineError>),
}

impl SiteOutcome {
    /// True when every part of the outcome succeeded
    pub fn is_success(&self) -> bool {
        match self {
            SiteOutcome::Text(t) => t.screenshot.is_ok() && t.artifact.is_ok(),
            SiteOutcome::Image(r) => r.is_ok(),
        }
    }
}

/// Aggregated view of a completed batch
#[derive(Debug)]
pub struct RunSummary {
    /// Outcomes in the same order as the configured site list
    pub outcomes: Vec<(String, SiteOutcome)>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Log one line per site plus the final tally
    pub fn log(&self) {
        for (url, outcome) in &self.outcomes {
            match outcome {
                SiteOutcome::Text(t) => {
                    match &t.screenshot {
                        Ok(path) => ::log::info!("{}: screenshot {}", url, path.display()),
                        Err(e) => ::log::error!("{}: screenshot failed: {}", url, e),
                    }
                    match &t.artifact {
                        Ok(path) => ::log::info!("{}: text artifact {}", url, path.display()),
                        Err(e) => ::log::error!("{}: text artifact failed: {}", url, e),
                    }
                }
                SiteOutcome::Image(Ok(artifact)) => {
                    ::log::info!(
                        "{}: thumbnail {} ({}x{}, from {})",
                        url,
                        artifact.path.display(),
                        artifact.width,
                        artifact.height,
                        artifact.source_url
                    );
                }
                SiteOutcome::Image(Err(e)) => {
                    ::log::error!("{}: image pipeline failed: {}", url, e);
                }
            }
        }
        ::log::info!(
            "Batch finished: {} succeeded, {} failed out of {}",
            self.succeeded(),
            self.failed(),
            self.outcomes.len()
        );
    }
}
