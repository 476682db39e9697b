use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for one pipeline run
///
/// Loaded from a JSON file and passed by reference into every component;
/// there is no global mutable configuration, so tests can build their own
/// value per call without cross-test leakage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ordered list of absolute site URLs to process
    #[serde(default)]
    pub sites: Vec<String>,

    /// Directory artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Per-request timeout for page and image fetches
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every HTTP request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of sites processed concurrently
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// URL for the WebDriver instance used for screenshots
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Delay after navigation before the screenshot is taken
    #[serde(default = "default_render_delay_ms")]
    pub render_delay_ms: u64,

    /// Browser viewport width for screenshots
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Browser viewport height for screenshots
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// CSS selector for the banner element whose background image is
    /// preferred as the representative thumbnail source
    #[serde(default = "default_banner_selector")]
    pub banner_selector: String,

    /// Output thumbnail width in pixels
    #[serde(default = "default_thumb_width")]
    pub thumb_width: u32,

    /// Output thumbnail height in pixels
    #[serde(default = "default_thumb_height")]
    pub thumb_height: u32,

    /// JPEG quality for thumbnails (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// URL-pattern to template-variant rules for the site-formatted text block
    #[serde(default = "default_template_rules")]
    pub templates: Vec<TemplateRule>,
}

/// Maps a URL-matching regex to a text template variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRule {
    /// Regex matched against the full site URL
    pub pattern: String,

    /// Template used when the pattern matches
    pub variant: TemplateVariant,
}

/// The two downstream consumers of the site-formatted block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateVariant {
    /// Bullet-list widget: `<li>` with a trailing "[link]" anchor,
    /// title truncated at the first `|`
    ListItem,

    /// Free-text blurb: anchor-wrapped title, description, "[link]" anchor
    Blurb,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            output_dir: default_output_dir(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            max_concurrency: default_max_concurrency(),
            webdriver_url: default_webdriver_url(),
            render_delay_ms: default_render_delay_ms(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            banner_selector: default_banner_selector(),
            thumb_width: default_thumb_width(),
            thumb_height: default_thumb_height(),
            jpeg_quality: default_jpeg_quality(),
            templates: default_template_rules(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("site-digest/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_concurrency() -> usize {
    4
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_render_delay_ms() -> u64 {
    1500
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}

fn default_banner_selector() -> String {
    ".banner".to_string()
}

fn default_thumb_width() -> u32 {
    400
}

fn default_thumb_height() -> u32 {
    200
}

fn default_jpeg_quality() -> u8 {
    80
}

/// The historical partner format survives as the default rule
fn default_template_rules() -> Vec<TemplateRule> {
    vec![TemplateRule {
        pattern: "buscandriu".to_string(),
        variant: TemplateVariant::ListItem,
    }]
}
