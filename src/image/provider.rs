//! Image provider trait.

use crate::error::Result;
use crate::image::types::{GeneratedImage, VariationRequest};
use async_trait::async_trait;

/// The external image-generation service, one call per variation.
///
/// `Ok(None)` means the service answered but returned no image payload.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generates at most one image for the given variation request.
    async fn generate(&self, request: &VariationRequest) -> Result<Option<GeneratedImage>>;

    /// Returns the name of this provider for display.
    fn name(&self) -> &str;
}

#[async_trait]
impl<P: ImageProvider + ?Sized> ImageProvider for std::sync::Arc<P> {
    async fn generate(&self, request: &VariationRequest) -> Result<Option<GeneratedImage>> {
        (**self).generate(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
