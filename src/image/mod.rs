//! Image transport types and the generation service seam.

mod provider;
pub mod providers;
mod types;

pub use provider::ImageProvider;
pub use types::{GeneratedImage, ImageData, ImageFormat, VariationRequest};
