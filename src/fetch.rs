use crate::config::PipelineConfig;
use crate::error::PipelineError;
use std::time::Duration;

/// A page fetched over HTTP, consumed once by the extractors
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the page was fetched from
    pub url: String,

    /// HTTP status code of the response
    pub status: u16,

    /// Raw HTML body
    pub body: String,
}

/// Build the shared HTTP client with the configured timeout and user agent
pub fn build_client(config: &PipelineConfig) -> Result<reqwest::Client, PipelineError> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| PipelineError::InvalidInput(format!("failed to build HTTP client: {e}")))
}

/// Fetch a page, treating any non-200 status as a failure
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedPage, PipelineError> {
    ::log::debug!("Fetching page: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| PipelineError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(PipelineError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| PipelineError::Network {
            url: url.to_string(),
            source,
        })?;

    ::log::debug!("Fetched {} ({} bytes)", url, body.len());

    Ok(FetchedPage {
        url: url.to_string(),
        status,
        body,
    })
}

/// Download raw bytes, used for source images
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, PipelineError> {
    ::log::debug!("Downloading: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PipelineError::ImageDownload {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(PipelineError::ImageDownload {
            url: url.to_string(),
            reason: format!("unexpected status {}", status.as_u16()),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| PipelineError::ImageDownload {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    Ok(bytes.to_vec())
}
