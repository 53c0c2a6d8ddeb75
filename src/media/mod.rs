// src/media/mod.rs
//! Image discovery and upload naming for the media re-hosting step.
//!
//! The upload itself happens outside this crate; these helpers decide which
//! URLs need re-hosting and what the uploaded files are called. The
//! resulting original → re-hosted mapping comes back as an [`ImageUrlMap`].
//!
//! [`ImageUrlMap`]: crate::types::ImageUrlMap

use crate::model::Block;
use serde::{Deserialize, Serialize};
use url::Url;

/// One image that should be re-hosted before publishing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub original_url: String,
    pub filename: String,
    pub content_type: String,
}

/// Collects the original URL of every image in the tree, depth-first in
/// document order. Images without a URL are skipped.
pub fn collect_image_urls(blocks: &[Block]) -> Vec<String> {
    let mut urls = Vec::new();
    walk_for_images(blocks, &mut urls);
    urls
}

fn walk_for_images(blocks: &[Block], urls: &mut Vec<String>) {
    for block in blocks {
        if let Block::Image(image) = block {
            if let Some(file) = &image.image {
                if !file.url().is_empty() {
                    urls.push(file.url().to_string());
                }
            }
        }
        walk_for_images(block.children(), urls);
    }
}

/// Plans the uploads for every image in the tree, named `{slug}-{n}`.
pub fn plan_image_uploads(blocks: &[Block], slug: &str) -> Vec<ImageUpload> {
    let uploads: Vec<ImageUpload> = collect_image_urls(blocks)
        .into_iter()
        .enumerate()
        .map(|(index, original_url)| {
            let hint = format!("{}-{}", slug, index + 1);
            ImageUpload {
                filename: upload_filename(&original_url, &hint),
                content_type: guess_content_type(&original_url).to_string(),
                original_url,
            }
        })
        .collect();
    log::debug!("Planned {} image uploads for '{}'", uploads.len(), slug);
    uploads
}

/// Plans the featured-image upload for a page cover, named `{slug}-cover`.
/// A blank cover URL plans nothing.
pub fn plan_cover_upload(cover_url: &str, slug: &str) -> Option<ImageUpload> {
    let original_url = cover_url.trim();
    if original_url.is_empty() {
        return None;
    }
    let hint = format!("{}-cover", slug);
    Some(ImageUpload {
        filename: upload_filename(original_url, &hint),
        content_type: guess_content_type(original_url).to_string(),
        original_url: original_url.to_string(),
    })
}

/// MIME type guessed from the URL text; JPEG when nothing matches.
pub fn guess_content_type(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    if lower.contains(".png") {
        "image/png"
    } else if lower.contains(".gif") {
        "image/gif"
    } else if lower.contains(".webp") {
        "image/webp"
    } else if lower.contains(".svg") {
        "image/svg+xml"
    } else {
        "image/jpeg"
    }
}

/// Upload file name `{hint}.{ext}`, taking the extension from the URL path
/// and falling back to the guessed content type.
pub fn upload_filename(url: &str, hint: &str) -> String {
    let ext = path_extension(url)
        .unwrap_or_else(|| extension_for(guess_content_type(url)).to_string());
    format!("{}.{}", hint, ext)
}

fn path_extension(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };
    let (_, ext) = path.rsplit_once('.')?;
    let is_word = !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then(|| ext.to_string())
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/svg+xml" => "svg",
        _ => "jpg",
    }
}
