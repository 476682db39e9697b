use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::fetch;
use crate::report::{RunSummary, SiteOutcome};
use crate::runner;
use crate::template::TemplateMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

/// Reject unusable site lists before any task is spawned
///
/// A bad list is the only fatal condition in a batch; everything after
/// launch is recorded per-site instead.
pub fn validate_sites(sites: &[String]) -> Result<(), PipelineError> {
    if sites.is_empty() {
        return Err(PipelineError::InvalidInput(
            "site list is empty".to_string(),
        ));
    }
    for url in sites {
        Url::parse(url)
            .map_err(|e| PipelineError::InvalidInput(format!("invalid site URL {url}: {e}")))?;
    }
    Ok(())
}

/// Run one task per site with bounded concurrency
///
/// The site list is validated up front; nothing is spawned for a bad list.
/// Every site gets its own spawned task gated by a shared semaphore, and the
/// results come back in input order regardless of completion order.
pub async fn for_each_site<F, Fut, T>(
    sites: &[String],
    max_concurrency: usize,
    task: F,
) -> Result<Vec<T>, PipelineError>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    validate_sites(sites)?;

    let task = Arc::new(task);
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));

    let handles: Vec<_> = sites
        .iter()
        .cloned()
        .map(|url| {
            let task = Arc::clone(&task);
            let semaphore = Arc::clone(&semaphore);
            tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                task(url).await
            })
        })
        .collect();

    // One result per site, same order as the input; a lost task is an error,
    // never a silently shorter batch
    let mut results = Vec::with_capacity(handles.len());
    for (url, handle) in sites.iter().zip(handles) {
        match handle.await {
            Ok(value) => results.push(value),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => {
                return Err(PipelineError::TaskCancelled {
                    url: url.clone(),
                });
            }
        }
    }
    Ok(results)
}

/// Text mode over the whole configured site list
pub async fn run_text_batch(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    validate_sites(&config.sites)?;
    ensure_output_dir(&config.output_dir)?;

    let templates = Arc::new(
        TemplateMap::new(&config.templates)
            .map_err(|e| PipelineError::InvalidInput(format!("bad template pattern: {e}")))?,
    );
    let client = fetch::build_client(config)?;
    let config = Arc::new(config.clone());
    let sites = config.sites.clone();
    let max_concurrency = config.max_concurrency;

    let outcomes = for_each_site(&sites, max_concurrency, move |url| {
        let config = Arc::clone(&config);
        let templates = Arc::clone(&templates);
        let client = client.clone();
        async move {
            let outcome = runner::run_text_site(&client, &config, &templates, &url).await;
            (url, SiteOutcome::Text(outcome))
        }
    })
    .await?;

    Ok(RunSummary { outcomes })
}

/// Image mode over the whole configured site list
///
/// The output directory is cleared first so a run's thumbnails are exactly
/// the thumbnails of that run.
pub async fn run_image_batch(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    validate_sites(&config.sites)?;
    reset_output_dir(&config.output_dir)?;

    let client = fetch::build_client(config)?;
    let config = Arc::new(config.clone());
    let sites = config.sites.clone();
    let max_concurrency = config.max_concurrency;

    let outcomes = for_each_site(&sites, max_concurrency, move |url| {
        let config = Arc::clone(&config);
        let client = client.clone();
        async move {
            let result = runner::run_image_site(&client, &config, &url).await;
            (url, SiteOutcome::Image(result))
        }
    })
    .await?;

    Ok(RunSummary { outcomes })
}

fn ensure_output_dir(dir: &str) -> Result<(), PipelineError> {
    std::fs::create_dir_all(dir).map_err(|source| PipelineError::FileWrite {
        path: PathBuf::from(dir),
        source,
    })
}

fn reset_output_dir(dir: &str) -> Result<(), PipelineError> {
    let path = Path::new(dir);
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|source| PipelineError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    ensure_output_dir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_empty_site_list_rejected() {
        let err = validate_sites(&[]);
        assert!(matches!(err, Err(PipelineError::InvalidInput(_))));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let sites = vec!["https://ok.example".to_string(), "not a url".to_string()];
        let err = validate_sites(&sites);
        assert!(matches!(err, Err(PipelineError::InvalidInput(_))));
    }

    #[test]
    fn test_valid_site_list_accepted() {
        let sites = vec![
            "https://a.example".to_string(),
            "http://b.example/path?q=1".to_string(),
        ];
        assert!(validate_sites(&sites).is_ok());
    }

    #[tokio::test]
    async fn test_results_keep_input_order() {
        let sites: Vec<String> = ["https://slow.example/", "https://medium.example/", "https://fast.example/"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let results = for_each_site(&sites, 3, |url| async move {
            let delay = if url.contains("slow") {
                60
            } else if url.contains("medium") {
                30
            } else {
                1
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            url
        })
        .await
        .unwrap();

        assert_eq!(
            results,
            vec![
                "https://slow.example/",
                "https://medium.example/",
                "https://fast.example/"
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrency_bound_respected() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static ACTIVE: AtomicUsize = AtomicUsize::new(0);
        static PEAK: AtomicUsize = AtomicUsize::new(0);

        let sites: Vec<String> = (0..8).map(|i| format!("https://site-{i}.example/")).collect();

        for_each_site(&sites, 2, |_url| async {
            let now = ACTIVE.fetch_add(1, Ordering::SeqCst) + 1;
            PEAK.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            ACTIVE.fetch_sub(1, Ordering::SeqCst);
        })
        .await
        .unwrap();

        assert!(PEAK.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_interior_failure_does_not_disturb_other_results() {
        let sites: Vec<String> = ["https://a.example/", "https://b.example/", "https://c.example/"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let results = for_each_site(&sites, 3, |url| async move {
            if url.contains("b.example") {
                Err(PipelineError::NoImagesFound { url })
            } else {
                Ok(url)
            }
        })
        .await
        .unwrap();

        assert_eq!(results.len(), sites.len());
        assert_eq!(results[0].as_deref().ok(), Some("https://a.example/"));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_deref().ok(), Some("https://c.example/"));
    }

    #[tokio::test]
    async fn test_for_each_site_rejects_empty_list_before_spawning() {
        let sites: Vec<String> = Vec::new();
        let err = for_each_site(&sites, 2, |url| async move { url }).await;
        assert!(matches!(err, Err(PipelineError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_text_batch_rejects_empty_config() {
        let config = PipelineConfig::default();
        let err = run_text_batch(&config).await;
        assert!(matches!(err, Err(PipelineError::InvalidInput(_))));
    }
}
