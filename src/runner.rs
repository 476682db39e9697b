use crate::artifact;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extract::metadata;
use crate::fetch;
use crate::report::{ImageArtifact, TextOutcome};
use crate::screenshot;
use crate::template::TemplateMap;
use std::path::{Path, PathBuf};

/// Text mode for one site: screenshot and text artifact, concurrently
///
/// The two halves are independent; a failed screenshot does not discard a
/// good text artifact, and vice versa.
pub async fn run_text_site(
    client: &reqwest::Client,
    config: &PipelineConfig,
    templates: &TemplateMap,
    url: &str,
) -> TextOutcome {
    ::log::info!("Processing {} (text mode)", url);

    let (screenshot, artifact) = tokio::join!(
        screenshot::capture(config, url),
        text_artifact(client, config, templates, url),
    );

    TextOutcome {
        screenshot,
        artifact,
    }
}

async fn text_artifact(
    client: &reqwest::Client,
    config: &PipelineConfig,
    templates: &TemplateMap,
    url: &str,
) -> Result<PathBuf, PipelineError> {
    let page = fetch::fetch_page(client, url).await?;
    let meta = metadata::extract_text_metadata(&page.body);
    ::log::debug!("{}: title {:?}", url, meta.title);

    let body = artifact::text::format_text_artifact(&meta, url, templates.variant_for(url));
    artifact::text::write_text_artifact(Path::new(&config.output_dir), url, &body)
}

/// Image mode for one site: fetch, pick an image, crop and save
pub async fn run_image_site(
    client: &reqwest::Client,
    config: &PipelineConfig,
    url: &str,
) -> Result<ImageArtifact, PipelineError> {
    ::log::info!("Processing {} (image mode)", url);

    let page = fetch::fetch_page(client, url).await?;
    artifact::image::process_page(client, config, url, &page.body).await
}
