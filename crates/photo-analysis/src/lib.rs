pub mod analyzer;
pub mod decode;
mod error;

pub use analyzer::analyze_pixels;
pub use decode::{analyze_image_bytes, decode_image, open_image, PixelBuffer};
pub use error::{AnalysisError, AnalysisResult};
