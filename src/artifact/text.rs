use crate::config::TemplateVariant;
use crate::error::PipelineError;
use crate::extract::TextMetadata;
use crate::slug;
use std::path::{Path, PathBuf};

/// Render the text artifact body for a page
///
/// Every artifact starts with the basic block; the template-variant block is
/// appended after it so partner feeds can lift their section without losing
/// the plain record.
pub fn format_text_artifact(meta: &TextMetadata, url: &str, variant: TemplateVariant) -> String {
    let mut body = format!(
        "Title: {}\n\nDescription: {}\n\nURL: {}\n\n",
        meta.title, meta.description, url
    );
    body.push_str(&template_block(meta, url, variant));
    body
}

fn template_block(meta: &TextMetadata, url: &str, variant: TemplateVariant) -> String {
    match variant {
        TemplateVariant::ListItem => {
            // Partner titles carry a " | section" suffix not wanted in lists
            let title = meta
                .title
                .split('|')
                .next()
                .unwrap_or(&meta.title)
                .trim();
            format!("<li>{title} <a href=\"{url}\">[link]</a></li>\n")
        }
        TemplateVariant::Blurb => format!(
            "<a href=\"{url}\">{}</a> {} <a href=\"{url}\">[link]</a><br><br>\n",
            meta.title, meta.description
        ),
    }
}

/// Write the text artifact to `{output_dir}/{site-slug}.md`
pub fn write_text_artifact(
    output_dir: &Path,
    url: &str,
    content: &str,
) -> Result<PathBuf, PipelineError> {
    let path = output_dir.join(format!("{}.md", slug::sanitize(&slug::clean_name(url))));

    std::fs::write(&path, content).map_err(|source| PipelineError::FileWrite {
        path: path.clone(),
        source,
    })?;

    ::log::info!("Wrote text artifact {}", path.display());
    Ok(path)
}
