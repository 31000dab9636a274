use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Named colors the sampler can classify a pixel into.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
    Gray,
    Brown,
    /// Sentinel used only in the degenerate fallback summary.
    Mixed,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Cheerful,
    Mysterious,
    Peaceful,
    Passionate,
    Natural,
    Dramatic,
    Bright,
    Contemplative,
    /// Sentinel used only in the degenerate fallback summary.
    Neutral,
}

impl Mood {
    /// Fixed emotion pair for a mood. Moods without a dedicated pair share
    /// the contemplation/reflection default.
    pub fn emotions(&self) -> [Emotion; 2] {
        match self {
            Mood::Cheerful => [Emotion::Joy, Emotion::Happiness],
            Mood::Mysterious => [Emotion::Intrigue, Emotion::Wonder],
            Mood::Peaceful => [Emotion::Calm, Emotion::Serenity],
            Mood::Passionate => [Emotion::Intensity, Emotion::Energy],
            Mood::Dramatic => [Emotion::Tension, Emotion::Excitement],
            Mood::Natural | Mood::Bright | Mood::Contemplative | Mood::Neutral => {
                [Emotion::Contemplation, Emotion::Reflection]
            }
        }
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Sky,
    Nature,
    Forest,
    Night,
    Urban,
    #[strum(serialize = "bright daylight")]
    #[serde(rename = "bright daylight")]
    BrightDaylight,
    Indoor,
    /// Sentinel used only in the degenerate fallback summary.
    Unknown,
}

/// Object and material tags the analyzer can attach to an image.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ObjectTag {
    Vegetation,
    Sky,
    Earth,
    Wood,
    Stone,
    Concrete,
    #[strum(serialize = "distinct shapes")]
    #[serde(rename = "distinct shapes")]
    DistinctShapes,
    #[strum(serialize = "various elements")]
    #[serde(rename = "various elements")]
    VariousElements,
    /// Sentinel used only in the degenerate fallback summary.
    Unknown,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Happiness,
    Intrigue,
    Wonder,
    Calm,
    Serenity,
    Intensity,
    Energy,
    Tension,
    Excitement,
    Contemplation,
    Reflection,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_multi_word_names_round_trip() {
        assert_eq!(Setting::BrightDaylight.to_string(), "bright daylight");
        assert_eq!(
            Setting::from_str("bright daylight").unwrap(),
            Setting::BrightDaylight
        );
        assert_eq!(ObjectTag::VariousElements.to_string(), "various elements");
        assert_eq!(ObjectTag::DistinctShapes.to_string(), "distinct shapes");
    }

    #[test]
    fn test_every_mood_has_an_emotion_pair() {
        for mood in Mood::iter() {
            assert_eq!(mood.emotions().len(), 2);
        }
        assert_eq!(
            Mood::Cheerful.emotions(),
            [Emotion::Joy, Emotion::Happiness]
        );
        assert_eq!(
            Mood::Neutral.emotions(),
            [Emotion::Contemplation, Emotion::Reflection]
        );
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Setting::BrightDaylight).unwrap();
        assert_eq!(json, "\"bright daylight\"");
        let json = serde_json::to_string(&ColorName::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }
}
