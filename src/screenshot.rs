use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::slug;
use fantoccini::ClientBuilder;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Render a page in the WebDriver browser and save a PNG screenshot
///
/// The screenshot lands at `{output_dir}/{site-slug}.png`. Each capture uses
/// its own WebDriver session so concurrent captures do not share state.
pub async fn capture(config: &PipelineConfig, url: &str) -> Result<PathBuf, PipelineError> {
    let render = |reason: String| PipelineError::Render {
        url: url.to_string(),
        reason,
    };

    let client = ClientBuilder::native()
        .connect(&config.webdriver_url)
        .await
        .map_err(|e| render(format!("WebDriver connect failed: {e}")))?;

    let result = capture_with(&client, config, url).await;

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session for {}: {}", url, e);
    }

    result
}

async fn capture_with(
    client: &fantoccini::Client,
    config: &PipelineConfig,
    url: &str,
) -> Result<PathBuf, PipelineError> {
    let render = |reason: String| PipelineError::Render {
        url: url.to_string(),
        reason,
    };

    client
        .set_window_size(config.viewport_width, config.viewport_height)
        .await
        .map_err(|e| render(format!("window resize failed: {e}")))?;

    client
        .goto(url)
        .await
        .map_err(|e| render(format!("navigation failed: {e}")))?;

    // Let late-loading content settle before the shot
    tokio::time::sleep(Duration::from_millis(config.render_delay_ms)).await;

    let png = client
        .screenshot()
        .await
        .map_err(|e| render(format!("screenshot failed: {e}")))?;

    let path = Path::new(&config.output_dir)
        .join(format!("{}.png", slug::sanitize(&slug::clean_name(url))));
    std::fs::write(&path, png).map_err(|source| PipelineError::FileWrite {
        path: path.clone(),
        source,
    })?;

    ::log::info!("Saved screenshot {}", path.display());
    Ok(path)
}
