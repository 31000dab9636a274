mod compose;
mod error;
pub mod templates;

pub use compose::{compose, compose_with_rng};
pub use error::{ComposeError, ComposeResult};
