pub mod images;
pub mod metadata;

#[cfg(test)]
mod tests;

/// Title and description extracted from a fetched page
///
/// Both fields are always populated; missing markup degrades to placeholder
/// text rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMetadata {
    /// Page title, `"No title found"` when absent
    pub title: String,

    /// Page description, `"No description found"` when absent
    pub description: String,
}

/// Where a candidate image was discovered on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    /// Inline `background-image` on the designated banner element
    BannerBackground,

    /// `src` attribute of a plain `<img>` element
    ImgSrc,
}

/// A discovered image URL with its provenance, not yet selected
#[derive(Debug, Clone)]
pub struct CandidateImage {
    /// Absolutized image URL
    pub url: String,

    /// `alt` text of the source element, if any
    pub alt_text: Option<String>,

    /// `title` attribute of the source element, if any
    pub title_text: Option<String>,

    /// How the image was discovered
    pub source: ImageSource,

    /// Title of the page the image was found on, if any
    pub page_title: Option<String>,
}
