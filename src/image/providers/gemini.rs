//! Gemini (Google) image generation provider.

use crate::ad::{CredentialProvider, EnvCredentials};
use crate::error::{
    is_entity_not_found, parse_retry_after, sanitize_error_message, AdGenError, Result,
};
use crate::image::provider::ImageProvider;
use crate::image::types::{GeneratedImage, ImageData, ImageFormat, VariationRequest};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Builder for GeminiProvider.
#[derive(Default)]
pub struct GeminiProviderBuilder {
    credentials: Option<Arc<dyn CredentialProvider>>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl GeminiProviderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit API key. Without one the key is read from the
    /// environment on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Arc::new(crate::ad::StaticCredentials::new(key)));
        self
    }

    /// Sets the credential source.
    pub fn credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(credentials));
        self
    }

    /// Overrides the API base URL (e.g. for a proxy).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the provider.
    pub fn build(self) -> Result<GeminiProvider> {
        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        Ok(GeminiProvider {
            client: client.build()?,
            credentials: self
                .credentials
                .unwrap_or_else(|| Arc::new(EnvCredentials)),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

impl std::fmt::Debug for GeminiProviderBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProviderBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Gemini image generation provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProviderBuilder`.
    pub fn builder() -> GeminiProviderBuilder {
        GeminiProviderBuilder::new()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn generate_impl(&self, request: &VariationRequest) -> Result<Option<GeneratedImage>> {
        let start = Instant::now();
        let api_key = self
            .credentials
            .api_key()
            .ok_or_else(|| AdGenError::Configuration("no Gemini API key configured".into()))?;

        let model = request.model.as_str();
        let body = GeminiRequest::from_variation_request(request);

        tracing::debug!(
            model,
            variation = request.variation.number(),
            with_reference = request.reference.is_some(),
            "sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let text = response.text().await.unwrap_or_default();
            return Err(parse_error(status.as_u16(), &text, &headers));
        }

        let gemini_response: GeminiResponse = response.json().await?;
        let duration_ms = start.elapsed().as_millis() as u64;
        extract_image(gemini_response, request, duration_ms)
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageProvider for GeminiProvider {
    async fn generate(&self, request: &VariationRequest) -> Result<Option<GeneratedImage>> {
        self.generate_impl(request).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Pulls the first inline image out of a successful response.
///
/// Blocks are errors; a response that simply carries no image is `Ok(None)`.
fn extract_image(
    response: GeminiResponse,
    request: &VariationRequest,
    duration_ms: u64,
) -> Result<Option<GeneratedImage>> {
    // Blocked prompts still come back as HTTP 200
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            let msg = feedback
                .block_reason_message
                .clone()
                .unwrap_or_else(|| format!("Prompt blocked: {}", reason));
            return Err(AdGenError::ContentBlocked(msg));
        }
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(None);
    };

    if let Some(finish_reason) = &candidate.finish_reason {
        match finish_reason.as_str() {
            "SAFETY"
            | "IMAGE_SAFETY"
            | "IMAGE_PROHIBITED_CONTENT"
            | "IMAGE_RECITATION"
            | "RECITATION"
            | "PROHIBITED_CONTENT"
            | "BLOCKLIST" => {
                return Err(AdGenError::ContentBlocked(format!(
                    "Content blocked by Gemini safety filter: {}",
                    finish_reason
                )));
            }
            "IMAGE_OTHER" | "NO_IMAGE" => {
                tracing::debug!(finish_reason, "Gemini produced no image");
                return Ok(None);
            }
            _ => {} // STOP, MAX_TOKENS, etc. are normal
        }
    }

    let Some(inline_data) = candidate
        .content
        .into_iter()
        .flat_map(|c| c.parts)
        .find_map(|p| p.inline_data)
    else {
        return Ok(None);
    };

    let data = base64::engine::general_purpose::STANDARD
        .decode(&inline_data.data)
        .map_err(|e| AdGenError::Decode(e.to_string()))?;

    let format = ImageFormat::from_mime_type(&inline_data.mime_type)
        .or_else(|| ImageFormat::from_magic_bytes(&data))
        .unwrap_or_default();

    Ok(Some(GeneratedImage {
        data,
        format,
        variation: request.variation,
        model: request.model.as_str().to_string(),
        duration_ms: Some(duration_ms),
    }))
}

fn parse_error(status: u16, text: &str, headers: &reqwest::header::HeaderMap) -> AdGenError {
    // Match the raw body; the sanitized copy is length-capped
    let entity_not_found = is_entity_not_found(text);
    let text = sanitize_error_message(text);
    if entity_not_found {
        return AdGenError::Credential(text);
    }
    if status == 402 {
        return AdGenError::Billing(
            "Gemini billing issue: enable billing at https://aistudio.google.com".into(),
        );
    }
    if status == 404 {
        return AdGenError::InvalidRequest(
            "Model not found. Verify the model name is correct.".into(),
        );
    }
    if status == 429 {
        let retry_after = parse_retry_after(headers).map(Duration::from_secs);
        return AdGenError::RateLimited { retry_after };
    }
    if status == 401 || status == 403 {
        return AdGenError::Auth(text);
    }
    let lower = text.to_lowercase();
    if lower.contains("safety")
        || lower.contains("blocked")
        || lower.contains("content_policy")
        || lower.contains("prohibited")
    {
        return AdGenError::ContentBlocked(text);
    }
    AdGenError::Api {
        status,
        message: text,
    }
}

// Request/Response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiRequestPart>,
}

/// A part in a Gemini request - can be text or inline image data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiRequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

impl GeminiRequestPart {
    fn image(image: &ImageData) -> Self {
        Self::InlineData {
            inline_data: GeminiInlineData {
                mime_type: image.mime_type.clone(),
                data: image.to_base64(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiConfig {
    response_modalities: Vec<String>,
    image_config: GeminiImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiImageConfig {
    aspect_ratio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_size: Option<String>,
}

impl GeminiRequest {
    fn from_variation_request(req: &VariationRequest) -> Self {
        // Product first, then the style reference, then the instruction
        let mut parts = vec![GeminiRequestPart::image(&req.product)];
        if let Some(reference) = &req.reference {
            parts.push(GeminiRequestPart::image(reference));
        }
        parts.push(GeminiRequestPart::Text {
            text: req.prompt.clone(),
        });

        Self {
            contents: vec![GeminiContent { parts }],
            generation_config: GeminiConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: GeminiImageConfig {
                    aspect_ratio: req.aspect_ratio.as_str().to_string(),
                    image_size: req.image_size.map(|s| s.as_str().to_string()),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPartResponse {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::{AspectRatio, ModelType, StaticCredentials, Variation};
    use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};

    fn request(model: ModelType, with_reference: bool) -> VariationRequest {
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        VariationRequest {
            variation: Variation::Second,
            prompt: "A studio shot".to_string(),
            product: ImageData::from_bytes(png.clone()),
            reference: with_reference.then(|| ImageData::from_bytes(png)),
            aspect_ratio: AspectRatio::Portrait,
            model,
            image_size: model.image_size(),
        }
    }

    #[test]
    fn test_builder_base_url() {
        let provider = GeminiProviderBuilder::new()
            .api_key("test-key")
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(
            provider.endpoint("gemini-2.5-flash-image"),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_default_endpoint() {
        let provider = GeminiProvider::builder().build().unwrap();
        assert!(provider
            .endpoint("gemini-3-pro-image-preview")
            .starts_with(DEFAULT_BASE_URL));
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let provider = GeminiProvider::builder()
            .credentials(StaticCredentials::none())
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let err = provider
            .generate(&request(ModelType::Flash, false))
            .await
            .unwrap_err();
        assert!(matches!(err, AdGenError::Configuration(_)));
    }

    #[test]
    fn test_request_construction_flash() {
        let gemini_req = GeminiRequest::from_variation_request(&request(ModelType::Flash, false));
        let json = serde_json::to_value(&gemini_req).unwrap();

        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["text"], "A studio shot");

        let config = &json["generationConfig"];
        assert_eq!(config["responseModalities"][0], "IMAGE");
        assert_eq!(config["imageConfig"]["aspectRatio"], "9:16");
        assert!(config["imageConfig"].get("imageSize").is_none());
        assert!(json.get("generation_config").is_none());
    }

    #[test]
    fn test_request_construction_pro_with_reference() {
        let gemini_req = GeminiRequest::from_variation_request(&request(ModelType::Pro, true));
        let json = serde_json::to_value(&gemini_req).unwrap();

        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].get("inlineData").is_some());
        assert!(parts[2].get("text").is_some());
        assert_eq!(json["generationConfig"]["imageConfig"]["imageSize"], "1K");
    }

    #[test]
    fn test_extract_image() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        let image = extract_image(resp, &request(ModelType::Flash, false), 12)
            .unwrap()
            .unwrap();
        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(image.variation, Variation::Second);
        assert_eq!(image.model, "gemini-2.5-flash-image");
        assert_eq!(image.duration_ms, Some(12));
        assert_eq!(&image.data[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn test_extract_no_image_is_none() {
        let req = request(ModelType::Flash, false);
        for json in [
            r#"{"candidates": []}"#,
            r#"{}"#,
            r#"{"candidates": [{"content": {"parts": [{}]}}]}"#,
            r#"{"candidates": [{"finishReason": "NO_IMAGE"}]}"#,
        ] {
            let resp: GeminiResponse = serde_json::from_str(json).unwrap();
            assert!(extract_image(resp, &req, 0).unwrap().is_none(), "{json}");
        }
    }

    #[test]
    fn test_extract_blocked() {
        let req = request(ModelType::Flash, false);
        let feedback = r#"{
            "candidates": [],
            "promptFeedback": {
                "blockReason": "SAFETY",
                "blockReasonMessage": "Prompt was blocked due to safety"
            }
        }"#;
        let resp: GeminiResponse = serde_json::from_str(feedback).unwrap();
        let err = extract_image(resp, &req, 0).unwrap_err();
        assert!(matches!(err, AdGenError::ContentBlocked(ref m) if m.contains("safety")));

        let finish = r#"{"candidates": [{"finishReason": "IMAGE_SAFETY"}]}"#;
        let resp: GeminiResponse = serde_json::from_str(finish).unwrap();
        assert!(matches!(
            extract_image(resp, &req, 0),
            Err(AdGenError::ContentBlocked(_))
        ));
    }

    #[test]
    fn test_parse_error_entity_not_found() {
        let body = r#"{"error": {"code": 404, "message": "Requested entity was not found.", "status": "NOT_FOUND"}}"#;
        let err = parse_error(404, body, &HeaderMap::new());
        assert!(matches!(err, AdGenError::Credential(_)));
        assert!(err.is_batch_fatal());

        // other statuses with the same signature are credential errors too
        let err = parse_error(400, body, &HeaderMap::new());
        assert!(matches!(err, AdGenError::Credential(_)));
    }

    #[test]
    fn test_parse_error_entity_not_found_after_long_details() {
        let details = "x".repeat(600);
        let body = format!(
            r#"{{"error": {{"code": 404, "details": "{details}", "message": "Requested entity was not found.", "status": "NOT_FOUND"}}}}"#
        );
        assert!(body.find("Requested entity").unwrap() > 500);

        match parse_error(404, &body, &HeaderMap::new()) {
            AdGenError::Credential(message) => {
                assert!(message.len() <= 503);
                assert!(message.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_status_mapping() {
        let headers = HeaderMap::new();
        assert!(matches!(
            parse_error(404, "no such model", &headers),
            AdGenError::InvalidRequest(_)
        ));
        assert!(matches!(
            parse_error(401, "API key not valid", &headers),
            AdGenError::Auth(_)
        ));
        assert!(matches!(
            parse_error(403, "forbidden", &headers),
            AdGenError::Auth(_)
        ));
        assert!(matches!(
            parse_error(402, "pay up", &headers),
            AdGenError::Billing(_)
        ));
        assert!(matches!(
            parse_error(400, "request blocked by safety system", &headers),
            AdGenError::ContentBlocked(_)
        ));
        assert!(matches!(
            parse_error(500, "internal", &headers),
            AdGenError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn test_parse_error_rate_limited() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));
        match parse_error(429, "slow down", &headers) {
            AdGenError::RateLimited { retry_after } => {
                assert_eq!(retry_after, Some(Duration::from_secs(30)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_redacts_key() {
        let body = "API key AIzaSyA1234567890abcdefghijklmnopqrstu is invalid";
        match parse_error(500, body, &HeaderMap::new()) {
            AdGenError::Api { message, .. } => {
                assert!(!message.contains("AIzaSy"));
                assert!(message.contains("[redacted]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
