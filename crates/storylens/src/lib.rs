//! Product pipeline: decode an uploaded photo, analyze it, compose a story
//! in a tone matched to the photo's mood, and prepare narration and
//! sharing inputs.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use narration::{
    plan as plan_narration, select_voice, silent_wav_clip, NarrationOptions, Utterance, Voice,
    VoiceId,
};
pub use photo_analysis::{
    analyze_image_bytes, analyze_pixels, decode_image, open_image, AnalysisError, AnalysisResult,
};
pub use share_kit::{download_payload, share_links, share_text};
pub use story_composer::{compose, compose_with_rng};
pub use story_metadata::{
    ColorName, Emotion, GenerationOptions, Mood, ObjectTag, PhotoSummary, Setting, StoryForm,
    StoryLength, Tone,
};

/// Last-resort story shown when the pipeline cannot produce anything.
pub const FALLBACK_STORY: &str = "In this captured moment, beauty and emotion intertwine to create something truly special. The image tells a story of life's precious moments, where every detail contributes to a narrative that speaks to the heart. This scene invites us to pause, reflect, and appreciate the stories that surround us every day.";

/// Narration speed used for generated stories.
const NARRATION_SPEED: f32 = 0.9;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryOutput {
    pub summary: PhotoSummary,
    pub story: String,
    pub utterance: Utterance,
    pub share_text: String,
}

/// Tone auto-selection from the analyzed mood. Only cheerful and mysterious
/// keep their own voice; everything else narrates contemplatively.
pub fn tone_for_mood(mood: Mood) -> Tone {
    match mood {
        Mood::Cheerful => Tone::Cheerful,
        Mood::Mysterious => Tone::Mysterious,
        _ => Tone::Contemplative,
    }
}

/// Run the full pipeline over encoded image bytes.
pub fn run(image_bytes: &[u8], voices: &[Voice]) -> AnalysisResult<StoryOutput> {
    run_with_rng(image_bytes, voices, &mut rand::thread_rng())
}

/// [`run`] with an injected RNG for deterministic story draws.
pub fn run_with_rng<R: Rng + ?Sized>(
    image_bytes: &[u8],
    voices: &[Voice],
    rng: &mut R,
) -> AnalysisResult<StoryOutput> {
    let buffer = photo_analysis::decode_image(image_bytes)?;
    let summary = photo_analysis::analyze_pixels(&buffer.data, buffer.width, buffer.height);

    let options = GenerationOptions {
        form: StoryForm::Story,
        tone: tone_for_mood(summary.mood),
        length: StoryLength::Medium,
    };
    let story = compose_with_rng(&summary, options, rng);
    info!(mood = %summary.mood, tone = %options.tone, chars = story.len(), "story generated");

    let utterance = narration::plan(
        story.clone(),
        NarrationOptions {
            voice: VoiceId::Aria,
            speed: NARRATION_SPEED,
            pitch: 1.0,
        },
        voices,
    );

    Ok(StoryOutput {
        share_text: share_kit::share_text(&story),
        summary,
        story,
        utterance,
    })
}

/// Like [`run`], but degrades to the fixed fallback output instead of
/// failing when the image cannot be decoded.
pub fn run_or_fallback(image_bytes: &[u8], voices: &[Voice]) -> StoryOutput {
    match run(image_bytes, voices) {
        Ok(output) => output,
        Err(err) => {
            warn!("story pipeline failed ({err}), using fallback output");
            let utterance = narration::plan(
                FALLBACK_STORY,
                NarrationOptions {
                    voice: VoiceId::Aria,
                    speed: NARRATION_SPEED,
                    pitch: 1.0,
                },
                voices,
            );
            StoryOutput {
                summary: PhotoSummary::fallback(),
                story: FALLBACK_STORY.to_string(),
                utterance,
                share_text: share_kit::share_text(FALLBACK_STORY),
            }
        }
    }
}
