//! Narration plan preparation. The speech engine itself lives outside this
//! workspace; this crate resolves voice preferences, fixes utterance
//! parameters, and provides the silent fallback clip used when synthesis
//! fails.

pub mod voice;
mod wav;

pub use voice::{select_voice, Voice, VoiceId};
pub use wav::silent_wav_clip;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationOptions {
    pub voice: VoiceId,
    pub speed: f32,
    pub pitch: f32,
}

impl Default for NarrationOptions {
    fn default() -> Self {
        Self {
            voice: VoiceId::Aria,
            speed: 1.0,
            pitch: 1.0,
        }
    }
}

/// Everything the speech engine needs for one narration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utterance {
    pub text: String,
    /// Resolved engine voice name, when one of the available voices matched
    /// the preference list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Build an utterance for the given text against the engine's available
/// voices. Volume is fixed at 0.8.
pub fn plan(text: impl Into<String>, options: NarrationOptions, available: &[Voice]) -> Utterance {
    let voice_name = select_voice(available, options.voice).map(|v| v.name.clone());
    Utterance {
        text: text.into(),
        voice_name,
        rate: options.speed,
        pitch: options.pitch,
        volume: 0.8,
    }
}
