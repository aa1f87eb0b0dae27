//! Credential gate: decides whether a generation may start.

use crate::ad::types::ModelType;

/// Environment variables searched for an API key, in order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

/// Source of the image-generation credential.
pub trait CredentialProvider: Send + Sync {
    /// Returns the API key, if one is configured.
    fn api_key(&self) -> Option<String>;

    /// Returns true if the user has selected a (paid) key.
    fn has_selected_key(&self) -> bool {
        self.api_key().is_some()
    }
}

impl<C: CredentialProvider + ?Sized> CredentialProvider for std::sync::Arc<C> {
    fn api_key(&self) -> Option<String> {
        (**self).api_key()
    }

    fn has_selected_key(&self) -> bool {
        (**self).has_selected_key()
    }
}

/// Reads the key from the environment on every call, so a key exported
/// after startup is picked up by the next generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        API_KEY_ENV_VARS.iter().find_map(|name| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    }
}

/// A key supplied explicitly.
#[derive(Clone, Default)]
pub struct StaticCredentials {
    key: Option<String>,
}

impl StaticCredentials {
    /// Wraps an explicit key. Blank keys count as missing.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let key = (!key.trim().is_empty()).then(|| key.trim().to_string());
        Self { key }
    }

    /// No key at all.
    pub fn none() -> Self {
        Self { key: None }
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("key", &self.key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.key.clone()
    }
}

/// Outcome of the credential gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Generation may start.
    Proceed,
    /// The premium model needs a selected key first.
    NeedsCredential,
}

/// Decides whether a generation with `model` may start.
///
/// Only the premium model is gated; the caller is expected to offer key
/// selection on [`GateDecision::NeedsCredential`] and let the user retry.
pub fn can_proceed(model: ModelType, has_credential: bool) -> GateDecision {
    if model.is_premium() && !has_credential {
        GateDecision::NeedsCredential
    } else {
        GateDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_matrix() {
        assert_eq!(can_proceed(ModelType::Flash, false), GateDecision::Proceed);
        assert_eq!(can_proceed(ModelType::Flash, true), GateDecision::Proceed);
        assert_eq!(can_proceed(ModelType::Pro, true), GateDecision::Proceed);
        assert_eq!(
            can_proceed(ModelType::Pro, false),
            GateDecision::NeedsCredential
        );
    }

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::new(" key ").api_key().as_deref(), Some("key"));
        assert!(StaticCredentials::new("key").has_selected_key());
        assert!(!StaticCredentials::new("   ").has_selected_key());
        assert!(!StaticCredentials::none().has_selected_key());
    }

    #[test]
    fn test_static_credentials_debug_redacts() {
        let debug = format!("{:?}", StaticCredentials::new("secret-key"));
        assert!(!debug.contains("secret-key"));
    }
}
