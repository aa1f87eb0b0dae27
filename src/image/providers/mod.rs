//! Image generation providers.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiProvider, GeminiProviderBuilder, DEFAULT_BASE_URL};
