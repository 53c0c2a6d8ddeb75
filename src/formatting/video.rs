// src/formatting/video.rs
//! Recognition of hosted-video URLs.

use crate::constants::VIDEO_EMBED_BASE_URL;
use once_cell::sync::Lazy;
use regex::Regex;

/// Watch, embed and short-link forms; the id is the first capture group.
static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([a-zA-Z0-9_-]+)")
        .expect("video URL pattern is valid")
});

/// Extracts the video id from a recognized video-sharing URL.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    VIDEO_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Player URL for an extracted video id.
pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", VIDEO_EMBED_BASE_URL, video_id)
}
