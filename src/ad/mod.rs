//! Ad configuration, prompt construction and generation.

pub mod catalog;
pub mod gate;
mod orchestrator;
pub mod prompt;
mod types;

pub use gate::{
    can_proceed, CredentialProvider, EnvCredentials, GateDecision, StaticCredentials,
    API_KEY_ENV_VARS,
};
pub use orchestrator::{AdGenerator, GenerationOutcome, GenerationPhase};
pub use types::{
    AdConfiguration, AdField, AdStyle, AspectRatio, ImageSize, ModelType, Variation,
};
