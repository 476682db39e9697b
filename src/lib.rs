// Re-export modules
pub mod artifact;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod runner;
pub mod screenshot;
pub mod slug;
pub mod template;

// Re-export commonly used types for convenience
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use report::RunSummary;

/// What the pipeline produces for each site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Text artifact plus full-page screenshot per site
    Text,
    /// Cropped JPEG thumbnail per site
    Image,
}

/// Main builder for a batch run over a list of sites
pub struct Pipeline {
    mode: ToolMode,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new Pipeline builder for the given mode
    pub fn new(mode: ToolMode) -> Self {
        Self {
            mode,
            config: PipelineConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = PipelineConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Replace the site list
    pub fn with_sites(mut self, sites: Vec<String>) -> Self {
        self.config.sites = sites;
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    /// Override the maximum number of concurrent site tasks
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Run the batch and collect per-site outcomes
    ///
    /// Fails only on unusable input (empty site list, unparseable URL, bad
    /// template pattern) or when the output directory cannot be prepared;
    /// per-site failures are recorded in the returned summary instead.
    pub async fn run(mut self) -> Result<RunSummary, PipelineError> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        match self.mode {
            ToolMode::Text => batch::run_text_batch(&self.config).await,
            ToolMode::Image => batch::run_image_batch(&self.config).await,
        }
    }
}
