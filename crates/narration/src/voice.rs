use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Preferred narrator identities offered to the user.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VoiceId {
    Aria,
    Roger,
    Sarah,
    Laura,
    Charlie,
}

impl VoiceId {
    /// Ordered engine-voice name fragments tried when resolving this
    /// identity against whatever voices the engine actually offers.
    pub fn preferences(&self) -> &'static [&'static str] {
        match self {
            VoiceId::Aria => &[
                "Google UK English Female",
                "Microsoft Zira",
                "Samantha",
                "female",
            ],
            VoiceId::Roger => &["Google UK English Male", "Microsoft David", "Alex", "male"],
            VoiceId::Sarah => &[
                "Google US English Female",
                "Microsoft Hazel",
                "Victoria",
                "female",
            ],
            VoiceId::Laura => &["Microsoft Helen", "Google UK English Female", "female"],
            VoiceId::Charlie => &["Google US English Male", "Microsoft Mark", "male"],
        }
    }
}

/// A voice reported by the speech engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// Resolve a preferred identity against the engine's available voices:
/// first case-insensitive name match in preference order, then any English
/// voice, then whatever comes first.
pub fn select_voice(available: &[Voice], preferred: VoiceId) -> Option<&Voice> {
    for preference in preferred.preferences() {
        let preference = preference.to_lowercase();
        if let Some(voice) = available
            .iter()
            .find(|v| v.name.to_lowercase().contains(&preference))
        {
            debug!(voice = %voice.name, %preferred, "resolved narration voice");
            return Some(voice);
        }
    }

    available
        .iter()
        .find(|v| v.lang.starts_with("en"))
        .or_else(|| available.first())
}
