use crate::vocabulary::{ColorName, Emotion, Mood, ObjectTag, Setting};
use serde::{Deserialize, Serialize};

/// Structured result of analyzing one photo. Built once per upload and kept
/// by the caller while the image is active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSummary {
    /// One-sentence synthesis of the analysis. Never empty.
    pub description: String,
    /// Detected object/material tags, never empty.
    pub objects: Vec<ObjectTag>,
    /// Up to 3 color names, most frequently sampled first.
    pub colors: Vec<ColorName>,
    pub mood: Mood,
    pub setting: Setting,
    /// Rough people estimate from skin-tone sampling. Absent when the
    /// analyzer had no pixel data to work with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<Emotion>>,
}

impl PhotoSummary {
    /// Fixed summary returned for degenerate input (empty buffer, zero
    /// dimensions). The analyzer never fails outward.
    pub fn fallback() -> Self {
        Self {
            description: "A beautiful image".to_string(),
            objects: vec![ObjectTag::Unknown],
            colors: vec![ColorName::Mixed],
            mood: Mood::Neutral,
            setting: Setting::Unknown,
            people: None,
            emotions: None,
        }
    }
}
