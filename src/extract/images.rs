use crate::extract::{CandidateImage, ImageSource, metadata};
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// Discover candidate images on a page
///
/// Primary rule: inline `background-image` declarations on elements matching
/// the banner selector. Only when that yields nothing does the extractor fall
/// back to plain `<img src>` elements. Candidates keep document order, and
/// banner-sourced entries always come before fallback entries. An empty list
/// is a valid result, not an error.
pub fn extract_candidate_images(
    html: &str,
    page_url: &str,
    banner_selector: &str,
) -> Vec<CandidateImage> {
    let doc = Html::parse_document(html);
    let base = Url::parse(page_url).ok();
    let page_title = metadata::page_title(&doc);

    let mut candidates = banner_candidates(&doc, banner_selector, base.as_ref(), &page_title);

    if candidates.is_empty() {
        candidates = img_candidates(&doc, base.as_ref(), &page_title);
    }

    ::log::debug!("Found {} candidate images on {}", candidates.len(), page_url);
    candidates
}

/// Inline background images on the designated banner elements
fn banner_candidates(
    doc: &Html,
    banner_selector: &str,
    base: Option<&Url>,
    page_title: &Option<String>,
) -> Vec<CandidateImage> {
    let selector = match Selector::parse(banner_selector) {
        Ok(selector) => selector,
        Err(_) => {
            ::log::warn!("Invalid banner selector {:?}, skipping banner scan", banner_selector);
            return Vec::new();
        }
    };

    // Tolerates single quotes, double quotes and bare URLs
    let background_re = Regex::new(r#"(?i)background-image\s*:\s*url\(\s*['"]?([^'")]+?)['"]?\s*\)"#)
        .expect("background-image pattern should be valid");

    let mut out = Vec::new();
    for element in doc.select(&selector) {
        let Some(style) = element.value().attr("style") else {
            continue;
        };
        let Some(captures) = background_re.captures(style) else {
            continue;
        };
        let raw = captures[1].trim();
        if let Some(url) = resolve_image_url(raw, base) {
            out.push(CandidateImage {
                url,
                alt_text: element.value().attr("alt").map(str::to_string),
                title_text: element.value().attr("title").map(str::to_string),
                source: ImageSource::BannerBackground,
                page_title: page_title.clone(),
            });
        }
    }
    out
}

/// Fallback: every `<img>` element's `src`, in document order
fn img_candidates(
    doc: &Html,
    base: Option<&Url>,
    page_title: &Option<String>,
) -> Vec<CandidateImage> {
    let selector = Selector::parse("img").unwrap();

    doc.select(&selector)
        .filter_map(|element| {
            let raw = element.value().attr("src")?;
            let url = resolve_image_url(raw.trim(), base)?;
            Some(CandidateImage {
                url,
                alt_text: element.value().attr("alt").map(str::to_string),
                title_text: element.value().attr("title").map(str::to_string),
                source: ImageSource::ImgSrc,
                page_title: page_title.clone(),
            })
        })
        .collect()
}

/// Absolutize an image reference against the page URL
///
/// Handles absolute, protocol-relative (`//`), root-relative (`/`) and
/// path-relative references. References that cannot be resolved are dropped.
fn resolve_image_url(raw: &str, base: Option<&Url>) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(absolute) = Url::parse(raw) {
        return Some(absolute.to_string());
    }

    base.and_then(|base| base.join(raw).ok())
        .map(|resolved| resolved.to_string())
}
