use story_metadata::{StoryForm, Tone};
use thiserror::Error;

pub type ComposeResult<T> = std::result::Result<T, ComposeError>;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("No templates registered for {form} / {tone}")]
    EmptyPool { form: StoryForm, tone: Tone },
}
