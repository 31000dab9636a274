use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Output shape requested by the user.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StoryForm {
    Story,
    Poem,
}

/// Narrative voice governing template and phrase selection.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Cheerful,
    Mysterious,
    Romantic,
    Adventurous,
    Contemplative,
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

/// Per-request generation settings. Transient, one value per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(rename = "type")]
    pub form: StoryForm,
    pub tone: Tone,
    pub length: StoryLength,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            form: StoryForm::Story,
            tone: Tone::Contemplative,
            length: StoryLength::Medium,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.form, StoryForm::Story);
        assert_eq!(options.tone, Tone::Contemplative);
        assert_eq!(options.length, StoryLength::Medium);
    }

    #[test]
    fn test_options_serde_field_names() {
        let json = serde_json::to_value(GenerationOptions::default()).unwrap();
        assert_eq!(json["type"], "story");
        assert_eq!(json["tone"], "contemplative");
        assert_eq!(json["length"], "medium");
    }
}
