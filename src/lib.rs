#![warn(missing_docs)]
//! AdGenius - AI product ad generation.
//!
//! Turns one product photo plus an ad configuration (style, aspect ratio,
//! model and a few optional copy fields) into three marketing image
//! variations, generated concurrently by an image model.
//!
//! # Quick Start
//!
//! ```no_run
//! use adgenius::{AdConfiguration, AdGenerator, AdStyle, EnvCredentials, GeminiProvider, ImageData};
//!
//! #[tokio::main]
//! async fn main() -> adgenius::Result<()> {
//!     let provider = GeminiProvider::builder().build()?;
//!     let generator = AdGenerator::new(provider, EnvCredentials);
//!
//!     let config = AdConfiguration::new()
//!         .with_style(AdStyle::Ecommerce)
//!         .with_price("29.99");
//!     let product = ImageData::from_path("sneaker.jpg")?;
//!
//!     for image in generator.generate_images(product, &config).await? {
//!         image.save(image.default_file_name())?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Prompts only
//!
//! ```
//! use adgenius::{prompt, AdConfiguration, AdStyle, Variation};
//!
//! let config = AdConfiguration::new().with_benefit_text("Deeper sleep");
//! let text = prompt::compose(AdStyle::Benefit, Variation::First, &config, false);
//! assert!(text.contains("Deeper sleep"));
//! ```
//!
//! # Features
//!
//! - `gemini`: Gemini image backend (reqwest)
//! - `cli`: the `adgenius` command-line tool

pub mod ad;
mod error;
pub mod image;

pub use ad::{catalog, gate, prompt};
pub use ad::{
    can_proceed, AdConfiguration, AdField, AdGenerator, AdStyle, AspectRatio, CredentialProvider,
    EnvCredentials, GateDecision, GenerationOutcome, GenerationPhase, ImageSize, ModelType,
    StaticCredentials, Variation,
};
pub use error::{is_entity_not_found, AdGenError, Result};
pub use image::{GeneratedImage, ImageData, ImageFormat, ImageProvider, VariationRequest};

#[cfg(feature = "gemini")]
pub use image::providers::{GeminiProvider, GeminiProviderBuilder};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ad::{
        AdConfiguration, AdGenerator, AdStyle, AspectRatio, CredentialProvider, EnvCredentials,
        GenerationOutcome, ModelType, StaticCredentials, Variation,
    };
    pub use crate::error::{AdGenError, Result};
    pub use crate::image::{GeneratedImage, ImageData, ImageProvider};

    #[cfg(feature = "gemini")]
    pub use crate::image::providers::GeminiProvider;
}
