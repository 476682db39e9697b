use crate::extract::TextMetadata;
use scraper::{Html, Selector};

/// Placeholder when the page carries no `<title>`
pub const NO_TITLE: &str = "No title found";

/// Placeholder when the page carries no usable description
pub const NO_DESCRIPTION: &str = "No description found";

/// Extract the title and description from raw HTML
///
/// Description preference order: `meta[name=description]`, then
/// `meta[property=og:description]`. Malformed markup degrades to empty
/// matches, so this never fails.
pub fn extract_text_metadata(html: &str) -> TextMetadata {
    let doc = Html::parse_document(html);

    let title = page_title(&doc).unwrap_or_else(|| NO_TITLE.to_string());

    let description = meta_content(&doc, "meta[name=\"description\"]")
        .or_else(|| meta_content(&doc, "meta[property=\"og:description\"]"))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    TextMetadata { title, description }
}

/// Extract the document `<title>`, if present and non-empty
pub fn page_title(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Read the trimmed `content` attribute of the first element matching the selector
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
