//! Fixed template pools keyed by (form, tone), with keyword tags used by
//! the selection bias.

use story_metadata::{StoryForm, Tone};

/// Relationship/nature cues a template can carry. Tagged explicitly rather
/// than re-derived from the template text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    Hearts,
    Souls,
    Dance,
    Whisper,
}

pub struct Template {
    pub text: &'static str,
    pub keywords: &'static [Keyword],
}

const STORY_CHEERFUL: &[Template] = &[
    Template {
        text: "In the {setting} where {colors} paint the world, {description}. The {mood} atmosphere fills every corner with {emotions}, creating a moment where {story_element} unfolds. Here, amidst the {objects}, life reveals its simple joys and {characters} find reasons to smile.",
        keywords: &[],
    },
    Template {
        text: "The morning light dances through the {setting}, casting {colors} across everything it touches. {description} captures a moment of pure {emotions}, where {story_element} and the world seems to celebrate {objects} in perfect harmony.",
        keywords: &[Keyword::Dance],
    },
];

const STORY_MYSTERIOUS: &[Template] = &[
    Template {
        text: "Shadows whisper secrets in this {setting}, where {colors} create an enigmatic tapestry. {description} holds mysteries yet to be unveiled. The {mood} ambiance suggests that {story_element}, while {objects} stand as silent witnesses to untold tales.",
        keywords: &[Keyword::Whisper],
    },
    Template {
        text: "In the depths of {setting}, {colors} weave through the {mood} landscape. {description} conceals more than it reveals, where {story_element} and {objects} guard their secrets beneath layers of {emotions}.",
        keywords: &[],
    },
];

const STORY_ROMANTIC: &[Template] = &[
    Template {
        text: "Love finds its way into this {setting}, painted in hues of {colors}. {description} tells of hearts that {story_element}, where {emotions} bloom like flowers among the {objects}. The {mood} scene whispers of connections that transcend time.",
        keywords: &[Keyword::Hearts, Keyword::Whisper],
    },
    Template {
        text: "Two souls might have walked through this {setting}, where {colors} frame their story. {description} captures the essence of {emotions}, where {story_element} and {objects} become witnesses to love's gentle touch.",
        keywords: &[Keyword::Souls],
    },
];

const STORY_ADVENTUROUS: &[Template] = &[
    Template {
        text: "Adventure calls from this {setting}, where {colors} mark the path forward. {description} speaks of journeys yet to begin, where brave hearts {story_element} and {objects} become landmarks in quests for discovery. The {mood} energy pulses with {emotions}.",
        keywords: &[Keyword::Hearts],
    },
    Template {
        text: "Beyond the horizon of this {setting}, {colors} paint promises of exploration. {description} captures the spirit of those who {story_element}, where {objects} serve as guideposts for {emotions} and endless possibilities.",
        keywords: &[],
    },
];

const STORY_CONTEMPLATIVE: &[Template] = &[
    Template {
        text: "In the quiet of this {setting}, {colors} invite reflection. {description} offers a moment to pause, where {story_element} and {objects} become mirrors for {emotions}. The {mood} atmosphere encourages deep thoughts and inner journeys.",
        keywords: &[],
    },
    Template {
        text: "Time seems to slow in this {setting}, where {colors} create a canvas for meditation. {description} captures the essence of {emotions}, where {story_element} and {objects} speak to the soul's need for {mood} contemplation.",
        keywords: &[],
    },
];

const POEM_CHEERFUL: &[Template] = &[
    Template {
        text: "In {setting} bright with {colors} gleaming,\n{description} sets hearts dreaming.\n{Objects} dance with {emotions} flowing,\nWhere {story_element}, joy is growing.",
        keywords: &[Keyword::Hearts, Keyword::Dance],
    },
    Template {
        text: "{Colors} paint the {setting} fair,\n{Emotions} floating in the air.\n{Description} captures moments sweet,\nWhere {story_element} and hearts meet.",
        keywords: &[Keyword::Hearts],
    },
];

const POEM_MYSTERIOUS: &[Template] = &[
    Template {
        text: "Through {setting} where {colors} hide,\n{Description} keeps secrets inside.\n{Objects} whisper tales untold,\nOf {emotions} and mysteries old.",
        keywords: &[Keyword::Whisper],
    },
    Template {
        text: "In shadows of the {setting} deep,\n{Colors} their vigil keep.\n{Description} holds what eyes can't see,\nWhere {story_element} and secrets be.",
        keywords: &[],
    },
];

const POEM_ROMANTIC: &[Template] = &[
    Template {
        text: "In {setting} where {colors} entwine,\n{Description} tells of love divine.\n{Objects} witness hearts that {story_element},\nWith {emotions} that forever gleam.",
        keywords: &[Keyword::Hearts],
    },
    Template {
        text: "{Colors} bloom in {setting} fair,\n{Emotions} floating through the air.\n{Description} captures love so true,\nWhere {story_element} and dreams come through.",
        keywords: &[],
    },
];

const POEM_CONTEMPLATIVE: &[Template] = &[
    Template {
        text: "In quiet {setting} where {colors} rest,\n{Description} stills the restless quest.\n{Objects} hold what time has taught,\nOf {emotions} and wandering thought.",
        keywords: &[],
    },
    Template {
        text: "Still hours in the {setting} keep,\n{Colors} drifting soft and deep.\n{Description} bids the heart to stay,\nWhere {story_element} at close of day.",
        keywords: &[],
    },
];

/// Pool lookup. Tones without a dedicated verse pool share the
/// contemplative one.
pub fn pool_for(form: StoryForm, tone: Tone) -> &'static [Template] {
    match form {
        StoryForm::Story => match tone {
            Tone::Cheerful => STORY_CHEERFUL,
            Tone::Mysterious => STORY_MYSTERIOUS,
            Tone::Romantic => STORY_ROMANTIC,
            Tone::Adventurous => STORY_ADVENTUROUS,
            Tone::Contemplative => STORY_CONTEMPLATIVE,
        },
        StoryForm::Poem => match tone {
            Tone::Cheerful => POEM_CHEERFUL,
            Tone::Mysterious => POEM_MYSTERIOUS,
            Tone::Romantic => POEM_ROMANTIC,
            Tone::Adventurous | Tone::Contemplative => POEM_CONTEMPLATIVE,
        },
    }
}

/// Action phrases substituted into the `{story_element}` slot.
pub fn actions_for(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Cheerful => &["celebrate life", "discover joy", "embrace happiness", "find wonder"],
        Tone::Mysterious => &[
            "unveil secrets",
            "explore the unknown",
            "seek hidden truths",
            "wander through enigmas",
        ],
        Tone::Romantic => &[
            "fall in love",
            "cherish moments",
            "write love letters",
            "dance together",
        ],
        Tone::Adventurous => &[
            "embark on quests",
            "chase horizons",
            "conquer fears",
            "explore new worlds",
        ],
        Tone::Contemplative => &[
            "reflect deeply",
            "ponder existence",
            "seek understanding",
            "find peace",
        ],
    }
}
