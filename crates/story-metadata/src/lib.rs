pub mod options;
pub mod summary;
pub mod vocabulary;

pub use options::{GenerationOptions, StoryForm, StoryLength, Tone};
pub use summary::PhotoSummary;
pub use vocabulary::{ColorName, Emotion, Mood, ObjectTag, Setting};
