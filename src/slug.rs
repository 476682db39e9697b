use url::Url;

/// Maximum length of a generated slug
const MAX_SLUG_LEN: usize = 50;

/// Fallback slug for text with no usable characters
const UNTITLED: &str = "untitled";

/// Fallback stem for URLs whose hostname cannot be determined
const UNKNOWN_SITE: &str = "unknown-site";

/// Convert arbitrary text into a filename-safe slug
///
/// The result is lowercase, contains only `[a-z0-9-]`, has no leading,
/// trailing or duplicate hyphens and is at most 50 characters long. Empty
/// input (or input with no alphanumeric characters at all) maps to the
/// literal `"untitled"`. This function never fails and is idempotent.
pub fn sanitize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            // Runs of separators collapse into a single hyphen
            pending_hyphen = true;
        }
    }

    // Slug content is ASCII only, so a byte truncation is safe
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        UNTITLED.to_string()
    } else {
        slug
    }
}

/// Derive a filename stem from a URL's hostname
///
/// Strips a leading `www.` and slugifies the remaining host. Malformed or
/// host-less URLs map to the fixed fallback `"unknown-site"`, which callers
/// must treat as a legitimate stem rather than an error signal.
pub fn clean_name(uri: &str) -> String {
    let Ok(parsed) = Url::parse(uri) else {
        return UNKNOWN_SITE.to_string();
    };

    match parsed.host_str() {
        Some(host) => {
            let host = host.strip_prefix("www.").unwrap_or(host);
            let slug = sanitize(host);
            if slug == UNTITLED {
                UNKNOWN_SITE.to_string()
            } else {
                slug
            }
        }
        None => UNKNOWN_SITE.to_string(),
    }
}
