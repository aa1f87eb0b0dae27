//! Generation orchestrator: three concurrent requests, one per variation.

use crate::ad::gate::{can_proceed, CredentialProvider, GateDecision};
use crate::ad::prompt;
use crate::ad::types::{AdConfiguration, ModelType, Variation};
use crate::error::{AdGenError, Result};
use crate::image::{GeneratedImage, ImageData, ImageProvider, VariationRequest};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

const MISSING_KEY: &str = "API key is missing. Please select an API key.";

/// Lifecycle phases of one generation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Nothing in flight.
    Idle,
    /// Checking credentials and decoding inputs.
    Validating,
    /// Variation requests in flight.
    Requesting,
    /// Gathering results.
    Collecting,
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Requesting => "requesting",
            Self::Collecting => "collecting",
        };
        f.write_str(name)
    }
}

/// Fans a configuration out into three variation requests.
///
/// # Example
///
/// ```rust,no_run
/// use adgenius::prelude::*;
///
/// # async fn example() -> adgenius::Result<()> {
/// let provider = GeminiProvider::builder().build()?;
/// let generator = AdGenerator::new(provider, EnvCredentials);
///
/// let product = ImageData::from_path("product.jpg")?;
/// let config = AdConfiguration::new().with_style(AdStyle::Studio);
/// for image in generator.generate_images(product, &config).await? {
///     image.save(image.default_file_name())?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdGenerator {
    provider: Arc<dyn ImageProvider>,
    credentials: Arc<dyn CredentialProvider>,
}

impl AdGenerator {
    /// Creates a generator over an image provider and a credential source.
    pub fn new(
        provider: impl ImageProvider + 'static,
        credentials: impl CredentialProvider + 'static,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            credentials: Arc::new(credentials),
        }
    }

    /// Returns the underlying provider's name.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generates up to three images from a product image given as a data URL
    /// (or bare base64).
    pub async fn generate(
        &self,
        product_image: &str,
        config: &AdConfiguration,
    ) -> Result<Vec<GeneratedImage>> {
        self.check_credentials(config.model)?;
        let product = ImageData::from_data_url(product_image)?;
        self.run(product, config).await
    }

    /// Generates up to three images from an already decoded product image.
    pub async fn generate_images(
        &self,
        product: ImageData,
        config: &AdConfiguration,
    ) -> Result<Vec<GeneratedImage>> {
        self.check_credentials(config.model)?;
        self.run(product, config).await
    }

    fn check_credentials(&self, model: ModelType) -> Result<()> {
        debug!(phase = %GenerationPhase::Validating, %model, "checking credentials");
        if can_proceed(model, self.credentials.has_selected_key()) == GateDecision::NeedsCredential
        {
            return Err(AdGenError::Configuration(format!(
                "{} requires a selected API key",
                model.display_name()
            )));
        }
        // Flash has no gate but still needs some key
        if self.credentials.api_key().is_none() {
            return Err(AdGenError::Configuration(MISSING_KEY.to_string()));
        }
        Ok(())
    }

    /// Builds the three requests. Fails before anything is sent if the
    /// reference image cannot be decoded.
    pub fn build_requests(
        product: ImageData,
        config: &AdConfiguration,
    ) -> Result<Vec<VariationRequest>> {
        let reference = config
            .reference_image()
            .map(ImageData::from_data_url)
            .transpose()?;
        let has_reference = reference.is_some();

        Ok(Variation::ALL
            .iter()
            .map(|&variation| VariationRequest {
                variation,
                prompt: prompt::compose(config.style, variation, config, has_reference),
                product: product.clone(),
                reference: reference.clone(),
                aspect_ratio: config.aspect_ratio,
                model: config.model,
                image_size: config.model.image_size(),
            })
            .collect())
    }

    async fn run(
        &self,
        product: ImageData,
        config: &AdConfiguration,
    ) -> Result<Vec<GeneratedImage>> {
        let requests = Self::build_requests(product, config)?;
        let start = Instant::now();

        debug!(
            phase = %GenerationPhase::Requesting,
            provider = self.provider.name(),
            style = %config.style,
            aspect_ratio = %config.aspect_ratio,
            model = %config.model,
            "sending variation requests"
        );
        let results = join_all(requests.iter().map(|req| self.provider.generate(req))).await;

        debug!(phase = %GenerationPhase::Collecting, "collecting variation results");
        let mut images = Vec::with_capacity(results.len());
        let mut fatal = None;
        for (request, result) in requests.iter().zip(results) {
            let variation = request.variation.number();
            match result {
                Ok(Some(image)) => images.push(image),
                Ok(None) => warn!(variation, "variation returned no image"),
                Err(e) if e.is_batch_fatal() => {
                    warn!(variation, error = %e, "variation failed with a credential error");
                    if fatal.is_none() {
                        fatal = Some(e);
                    }
                }
                Err(e) => warn!(variation, error = %e, "variation failed, dropping"),
            }
        }

        if let Some(e) = fatal {
            return Err(e);
        }

        info!(
            generated = images.len(),
            requested = requests.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );
        debug!(phase = %GenerationPhase::Idle, "batch complete");
        Ok(images)
    }
}

impl std::fmt::Debug for AdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdGenerator")
            .field("provider", &self.provider.name())
            .finish_non_exhaustive()
    }
}

/// Terminal state of a generation attempt, as shown to the user.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// At least one image was produced.
    Succeeded(Vec<GeneratedImage>),
    /// Every variation failed or came back empty.
    EmptyResult,
    /// The service rejected the credential.
    CredentialError(String),
    /// No credential was configured.
    ConfigurationError(String),
    /// Anything else, e.g. an undecodable input image.
    OtherError(String),
}

impl GenerationOutcome {
    /// Maps an orchestrator result onto an outcome.
    pub fn from_result(result: Result<Vec<GeneratedImage>>) -> Self {
        match result {
            Ok(images) if images.is_empty() => Self::EmptyResult,
            Ok(images) => Self::Succeeded(images),
            Err(AdGenError::EmptyBatch) => Self::EmptyResult,
            Err(AdGenError::Credential(msg)) => Self::CredentialError(msg),
            Err(AdGenError::Configuration(msg)) => Self::ConfigurationError(msg),
            Err(e) => Self::OtherError(e.to_string()),
        }
    }

    /// Returns true if images were produced.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns true if the caller should offer key selection again.
    pub fn needs_credential_prompt(&self) -> bool {
        matches!(self, Self::CredentialError(_) | Self::ConfigurationError(_))
    }

    /// User-facing message for failed outcomes; `None` on success.
    pub fn user_message(&self, model: ModelType) -> Option<String> {
        match self {
            Self::Succeeded(_) => None,
            Self::EmptyResult => Some(AdGenError::EmptyBatch.to_string()),
            Self::CredentialError(_) | Self::ConfigurationError(_) => Some(
                if model.is_premium() {
                    "Access denied. Gemini 3 Pro requires a valid API key."
                } else {
                    "API Key missing. Please select a key."
                }
                .to_string(),
            ),
            Self::OtherError(msg) => Some(msg.clone()),
        }
    }

    /// Consumes the outcome, returning the images (empty unless succeeded).
    pub fn into_images(self) -> Vec<GeneratedImage> {
        match self {
            Self::Succeeded(images) => images,
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::gate::StaticCredentials;
    use crate::ad::types::AdStyle;
    use crate::image::ImageFormat;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    type Script = fn(Variation) -> Result<Option<GeneratedImage>>;

    struct FakeProvider {
        calls: AtomicUsize,
        seen: Mutex<Vec<VariationRequest>>,
        script: Script,
        barrier: Option<tokio::sync::Barrier>,
    }

    impl FakeProvider {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                script,
                barrier: None,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageProvider for FakeProvider {
        async fn generate(&self, request: &VariationRequest) -> Result<Option<GeneratedImage>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            (self.script)(request.variation)
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn image(variation: Variation) -> GeneratedImage {
        GeneratedImage {
            data: vec![variation.number() as u8],
            format: ImageFormat::Png,
            variation,
            model: "fake".to_string(),
            duration_ms: None,
        }
    }

    fn all_ok(v: Variation) -> Result<Option<GeneratedImage>> {
        Ok(Some(image(v)))
    }

    fn product() -> &'static str {
        // "hello" in base64
        "data:image/png;base64,aGVsbG8="
    }

    fn generator(provider: &Arc<FakeProvider>) -> AdGenerator {
        AdGenerator::new(provider.clone(), StaticCredentials::new("test-key"))
    }

    #[tokio::test]
    async fn test_three_requests_in_order() {
        let provider = FakeProvider::new(all_ok);
        let config = AdConfiguration::new().with_style(AdStyle::Studio);
        let images = generator(&provider)
            .generate(product(), &config)
            .await
            .unwrap();

        assert_eq!(provider.calls(), 3);
        let order: Vec<usize> = images.iter().map(|i| i.variation.number()).collect();
        assert_eq!(order, vec![1, 2, 3]);

        let seen = provider.seen.lock().unwrap();
        for request in seen.iter() {
            assert_eq!(request.product.bytes, b"hello");
            assert!(request.reference.is_none());
            assert!(request.image_size.is_none());
            assert!(request.prompt.contains(&format!(
                "VARIATION {}",
                request.variation.number()
            )));
        }
    }

    #[tokio::test]
    async fn test_requests_run_concurrently() {
        let provider = Arc::new(FakeProvider {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            script: all_ok,
            barrier: Some(tokio::sync::Barrier::new(3)),
        });
        let generator = generator(&provider);
        let config = AdConfiguration::new();
        let images = tokio::time::timeout(
            Duration::from_secs(5),
            generator.generate(product(), &config),
        )
        .await
        .expect("requests were not in flight together")
        .unwrap();
        assert_eq!(images.len(), 3);
    }

    #[tokio::test]
    async fn test_soft_failure_dropped() {
        let provider = FakeProvider::new(|v| match v {
            Variation::Second => Err(AdGenError::Api {
                status: 500,
                message: "busy".to_string(),
            }),
            _ => Ok(Some(image(v))),
        });
        let images = generator(&provider)
            .generate(product(), &AdConfiguration::new())
            .await
            .unwrap();
        let order: Vec<usize> = images.iter().map(|i| i.variation.number()).collect();
        assert_eq!(order, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_empty_and_blocked_dropped() {
        let provider = FakeProvider::new(|v| match v {
            Variation::First => Ok(None),
            Variation::Second => Err(AdGenError::ContentBlocked("SAFETY".to_string())),
            Variation::Third => Ok(Some(image(v))),
        });
        let images = generator(&provider)
            .generate(product(), &AdConfiguration::new())
            .await
            .unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].variation, Variation::Third);
    }

    #[tokio::test]
    async fn test_all_fail_yields_empty() {
        let provider = FakeProvider::new(|_| Ok(None));
        let result = generator(&provider)
            .generate(product(), &AdConfiguration::new())
            .await;
        let images = result.unwrap();
        assert!(images.is_empty());
        assert_eq!(provider.calls(), 3);

        let outcome = GenerationOutcome::from_result(Ok(images));
        assert!(matches!(outcome, GenerationOutcome::EmptyResult));
        assert_eq!(
            outcome.user_message(ModelType::Flash).unwrap(),
            "Failed to generate any images. The model might be busy or the request was blocked."
        );
    }

    #[tokio::test]
    async fn test_credential_error_reraised() {
        let provider = FakeProvider::new(|v| match v {
            Variation::Third => Err(AdGenError::Credential(
                "Requested entity was not found.".to_string(),
            )),
            _ => Ok(Some(image(v))),
        });
        let config = AdConfiguration::new().with_model(ModelType::Pro);
        let err = generator(&provider)
            .generate(product(), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, AdGenError::Credential(_)));
        // the other requests still ran to completion
        assert_eq!(provider.calls(), 3);

        let outcome = GenerationOutcome::from_result(Err(err));
        assert!(outcome.needs_credential_prompt());
        assert_eq!(
            outcome.user_message(ModelType::Pro).unwrap(),
            "Access denied. Gemini 3 Pro requires a valid API key."
        );
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        let provider = FakeProvider::new(all_ok);
        let generator = AdGenerator::new(provider.clone(), StaticCredentials::none());
        let err = generator
            .generate(product(), &AdConfiguration::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AdGenError::Configuration(_)));
        assert_eq!(provider.calls(), 0);

        let outcome = GenerationOutcome::from_result(Err(err));
        assert_eq!(
            outcome.user_message(ModelType::Flash).unwrap(),
            "API Key missing. Please select a key."
        );
    }

    /// A free-tier key: usable, but not a selected paid key.
    struct FreeTierKey;

    impl CredentialProvider for FreeTierKey {
        fn api_key(&self) -> Option<String> {
            Some("free-key".to_string())
        }

        fn has_selected_key(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_premium_gate_without_selected_key() {
        let provider = FakeProvider::new(all_ok);
        let generator = AdGenerator::new(provider.clone(), FreeTierKey);

        let pro = AdConfiguration::new().with_model(ModelType::Pro);
        let err = generator.generate(product(), &pro).await.unwrap_err();
        assert!(matches!(err, AdGenError::Configuration(ref m) if m.contains("Gemini 3 Pro")));
        assert_eq!(provider.calls(), 0);

        let flash = AdConfiguration::new().with_model(ModelType::Flash);
        let images = generator.generate(product(), &flash).await.unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_bad_product_image_sends_nothing() {
        let provider = FakeProvider::new(all_ok);
        let err = generator(&provider)
            .generate("data:image/png;base64,", &AdConfiguration::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AdGenError::Decode(_)));
        assert_eq!(provider.calls(), 0);
        assert!(matches!(
            GenerationOutcome::from_result(Err(err)),
            GenerationOutcome::OtherError(_)
        ));
    }

    #[tokio::test]
    async fn test_reference_and_pro_size() {
        let provider = FakeProvider::new(all_ok);
        let config = AdConfiguration::new()
            .with_model(ModelType::Pro)
            .with_reference_image("data:image/png;base64,d29ybGQ=");
        generator(&provider)
            .generate(product(), &config)
            .await
            .unwrap();

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        for request in seen.iter() {
            assert_eq!(request.reference.as_ref().unwrap().bytes, b"world");
            assert_eq!(request.image_size, ModelType::Pro.image_size());
            assert!(request.prompt.contains("Image 2: The Style Reference."));
            assert!(request.prompt.contains("TASK: "));
        }
    }

    #[test]
    fn test_outcome_success() {
        let outcome = GenerationOutcome::from_result(Ok(vec![image(Variation::First)]));
        assert!(outcome.is_success());
        assert!(outcome.user_message(ModelType::Flash).is_none());
        assert_eq!(outcome.into_images().len(), 1);
    }
}
