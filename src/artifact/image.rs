use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extract::CandidateImage;
use crate::fetch;
use crate::report::ImageArtifact;
use crate::slug;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Center-crop region in source image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Largest centered region of the source matching the target aspect ratio
///
/// Wider-than-target sources keep full height and trim the sides; taller
/// sources keep full width and trim top and bottom. The region never exceeds
/// the source bounds.
pub fn compute_crop(orig_w: u32, orig_h: u32, target_w: u32, target_h: u32) -> CropGeometry {
    let image_ratio = orig_w as f64 / orig_h as f64;
    let target_ratio = target_w as f64 / target_h as f64;

    if image_ratio > target_ratio {
        let crop_w = ((orig_h as f64 * target_ratio).round() as u32).min(orig_w);
        CropGeometry {
            x: (orig_w - crop_w) / 2,
            y: 0,
            width: crop_w,
            height: orig_h,
        }
    } else {
        let crop_h = ((orig_w as f64 / target_ratio).round() as u32).min(orig_h);
        CropGeometry {
            x: 0,
            y: (orig_h - crop_h) / 2,
            width: orig_w,
            height: crop_h,
        }
    }
}

/// Output filename for a cropped thumbnail
///
/// `{host-slug}_{title-slug}_{millis}.jpg` when the page URL has a usable
/// host, `cropped_image_{millis}.jpg` otherwise.
pub fn image_filename(page_title: Option<&str>, page_url: &str, epoch_millis: u128) -> String {
    let host = slug::clean_name(page_url);
    if host == "unknown-site" {
        return format!("cropped_image_{epoch_millis}.jpg");
    }

    let title = slug::sanitize(page_title.unwrap_or(""));
    format!("{host}_{title}_{epoch_millis}.jpg")
}

/// Dimensions of a thumbnail as written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedImage {
    pub width: u32,
    pub height: u32,
}

/// Decode raw image bytes, center-crop to the configured aspect ratio,
/// resize to the thumbnail dimensions and write out as JPEG
pub fn crop_and_save(
    bytes: &[u8],
    dest: &Path,
    config: &PipelineConfig,
    source_url: &str,
) -> Result<SavedImage, PipelineError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| PipelineError::ImageDecode {
        url: source_url.to_string(),
        reason: e.to_string(),
    })?;

    let crop = compute_crop(
        decoded.width(),
        decoded.height(),
        config.thumb_width,
        config.thumb_height,
    );
    let thumb = decoded
        .crop_imm(crop.x, crop.y, crop.width, crop.height)
        .resize_exact(config.thumb_width, config.thumb_height, FilterType::Lanczos3);

    let file = File::create(dest).map_err(|source| PipelineError::FileWrite {
        path: dest.to_path_buf(),
        source,
    })?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), config.jpeg_quality);
    thumb
        .write_with_encoder(encoder)
        .map_err(|e| PipelineError::ImageEncode {
            reason: e.to_string(),
        })?;

    ::log::info!("Wrote thumbnail {}", dest.display());
    Ok(SavedImage {
        width: thumb.width(),
        height: thumb.height(),
    })
}

/// Full image pipeline for one fetched page
///
/// Picks the first candidate image, downloads it, and writes the cropped
/// thumbnail into the output directory.
pub async fn process_page(
    client: &reqwest::Client,
    config: &PipelineConfig,
    page_url: &str,
    html: &str,
) -> Result<ImageArtifact, PipelineError> {
    let candidates =
        crate::extract::images::extract_candidate_images(html, page_url, &config.banner_selector);

    let Some(candidate) = candidates.first() else {
        return Err(PipelineError::NoImagesFound {
            url: page_url.to_string(),
        });
    };
    ::log::debug!("Selected image {} from {}", candidate.url, page_url);

    let bytes = fetch::fetch_bytes(client, &candidate.url).await?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let filename = image_filename(candidate.page_title.as_deref(), page_url, millis);
    let dest = Path::new(&config.output_dir).join(&filename);

    let saved = crop_and_save(&bytes, &dest, config, &candidate.url)?;

    Ok(ImageArtifact {
        page_url: page_url.to_string(),
        path: dest,
        filename,
        width: saved.width,
        height: saved.height,
        source_url: candidate.url.clone(),
        source: candidate.source,
    })
}
