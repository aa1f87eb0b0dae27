//! Error types for ad generation.

use std::time::Duration;

/// Marker the image service returns when the selected key (or the project
/// behind it) cannot see the requested model.
pub(crate) const ENTITY_NOT_FOUND: &str = "requested entity was not found";

/// Longest upstream error body kept in an error message.
const MAX_ERROR_MESSAGE_LEN: usize = 500;

/// Errors that can occur while composing or generating ads.
#[derive(Debug, thiserror::Error)]
pub enum AdGenError {
    /// No usable credential is configured. Raised before any request is sent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The service rejected the credential for the requested model
    /// ("Requested entity was not found").
    #[error("access denied: {0}")]
    Credential(String),

    /// API key invalid.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Billing is not enabled for the key's project.
    #[error("billing error: {0}")]
    Billing(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    /// Content was blocked by safety filters.
    #[error("content blocked: {0}")]
    ContentBlocked(String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The service answered with something we could not interpret.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network or HTTP error.
    #[cfg(feature = "gemini")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 / data URL input.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., reading an input image or saving a result).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// All three variations failed.
    #[error("Failed to generate any images. The model might be busy or the request was blocked.")]
    EmptyBatch,
}

impl AdGenError {
    /// Returns true for errors that concern the whole batch rather than a
    /// single variation. These are the only errors the orchestrator re-raises.
    pub fn is_batch_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Credential(_))
    }
}

/// Result type alias for ad generation operations.
pub type Result<T> = std::result::Result<T, AdGenError>;

/// Returns true if an upstream error message carries the
/// "entity not found" signature.
pub fn is_entity_not_found(message: &str) -> bool {
    message.to_lowercase().contains(ENTITY_NOT_FOUND)
}

/// Parses a `Retry-After` header given in seconds.
#[cfg(feature = "gemini")]
pub(crate) fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Strips anything that looks like an API key and caps the length of an
/// upstream error body.
pub(crate) fn sanitize_error_message(text: &str) -> String {
    let redacted: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            let bare = word.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '-');
            if bare.starts_with("AIza") && bare.len() >= 30 {
                word.replace(bare, "[redacted]")
            } else {
                word.to_string()
            }
        })
        .collect();
    let mut message = redacted.join(" ");
    if message.len() > MAX_ERROR_MESSAGE_LEN {
        let mut cut = MAX_ERROR_MESSAGE_LEN;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
        message.push_str("...");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_fatal() {
        assert!(AdGenError::Configuration("no key".into()).is_batch_fatal());
        assert!(AdGenError::Credential("not found".into()).is_batch_fatal());

        assert!(!AdGenError::Auth("bad key".into()).is_batch_fatal());
        assert!(!AdGenError::ContentBlocked("nsfw".into()).is_batch_fatal());
        assert!(!AdGenError::RateLimited { retry_after: None }.is_batch_fatal());
        assert!(!AdGenError::UnexpectedResponse("no candidates".into()).is_batch_fatal());
        assert!(!AdGenError::EmptyBatch.is_batch_fatal());
    }

    #[test]
    fn test_entity_not_found_signature() {
        assert!(is_entity_not_found("Requested entity was not found."));
        assert!(is_entity_not_found(
            r#"{"error":{"code":404,"message":"Requested entity was not found.","status":"NOT_FOUND"}}"#
        ));
        assert!(!is_entity_not_found("Model not found"));
        assert!(!is_entity_not_found("quota exceeded"));
    }

    #[test]
    fn test_sanitize_redacts_keys() {
        let msg = "invalid key AIzaSyA1234567890abcdefghijklmnopqrstu supplied";
        let clean = sanitize_error_message(msg);
        assert!(!clean.contains("AIzaSy"));
        assert!(clean.contains("[redacted]"));
        assert!(clean.starts_with("invalid key"));
    }

    #[test]
    fn test_sanitize_caps_length() {
        let long = "x".repeat(2_000);
        let clean = sanitize_error_message(&long);
        assert_eq!(clean.len(), MAX_ERROR_MESSAGE_LEN + 3);
        assert!(clean.ends_with("..."));
    }

    #[test]
    fn test_error_display() {
        let err = AdGenError::Api {
            status: 500,
            message: "Internal".into(),
        };
        assert_eq!(err.to_string(), "API error: 500 - Internal");

        let err = AdGenError::Credential("Requested entity was not found.".into());
        assert_eq!(err.to_string(), "access denied: Requested entity was not found.");

        assert_eq!(
            AdGenError::EmptyBatch.to_string(),
            "Failed to generate any images. The model might be busy or the request was blocked."
        );
    }
}
