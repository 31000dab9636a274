use thiserror::Error;

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image io error: {0}")]
    Io(#[from] std::io::Error),
}
