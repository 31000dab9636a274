//! Share and download helpers: preview text, per-platform share links, and
//! the plain-text download payload.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use url::Url;

/// Preview length used in share text, matching the product copy.
const PREVIEW_CHARS: usize = 100;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Twitter,
    Facebook,
    LinkedIn,
    Email,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub platform: SharePlatform,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPayload {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Teaser line used everywhere a story is shared.
pub fn share_text(story: &str) -> String {
    let preview: String = story.chars().take(PREVIEW_CHARS).collect();
    format!("Check out this amazing AI-generated story: \"{preview}...\"")
}

/// Build the per-platform share URLs for a story hosted at `page_url`.
pub fn share_links(story: &str, page_url: &str) -> Vec<ShareLink> {
    let text = share_text(story);
    let mut links = Vec::with_capacity(4);

    if let Some(url) = with_params(
        "https://twitter.com/intent/tweet",
        &[("text", text.as_str()), ("url", page_url)],
    ) {
        links.push(ShareLink {
            platform: SharePlatform::Twitter,
            url,
        });
    }
    if let Some(url) = with_params(
        "https://www.facebook.com/sharer/sharer.php",
        &[("u", page_url)],
    ) {
        links.push(ShareLink {
            platform: SharePlatform::Facebook,
            url,
        });
    }
    if let Some(url) = with_params(
        "https://www.linkedin.com/sharing/share-offsite/",
        &[("url", page_url)],
    ) {
        links.push(ShareLink {
            platform: SharePlatform::LinkedIn,
            url,
        });
    }

    let body = format!("{text}\n\n{page_url}");
    if let Some(url) = with_params(
        "mailto:",
        &[("subject", "Amazing AI Story"), ("body", body.as_str())],
    ) {
        links.push(ShareLink {
            platform: SharePlatform::Email,
            url,
        });
    }

    links
}

fn with_params(base: &str, params: &[(&str, &str)]) -> Option<String> {
    Url::parse_with_params(base, params)
        .ok()
        .map(|u| u.to_string())
}

/// The story as a downloadable text file.
pub fn download_payload(story: &str) -> DownloadPayload {
    DownloadPayload {
        filename: "story.txt".to_string(),
        mime: "text/plain".to_string(),
        bytes: story.as_bytes().to_vec(),
    }
}
