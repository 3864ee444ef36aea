//! Explicit runtime configuration.
//!
//! The process environment is read in exactly one place
//! ([`Settings::from_env`]); everything downstream receives a constructed
//! [`Settings`] value, so tests can build one directly without touching
//! global state.

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "XAI_API_KEY";

/// The xAI API endpoint (OpenAI-compatible chat completions).
pub const DEFAULT_ENDPOINT: &str = "https://api.x.ai";

/// The model every request is sent to.
pub const DEFAULT_MODEL: &str = "grok-beta";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The API key, if present in the environment. An empty value counts
    /// as absent.
    pub api_key: Option<String>,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model name.
    pub model: String,
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// Only `XAI_API_KEY` is consulted; endpoint and model are fixed.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Returns `true` if a non-empty API key is present.
    pub fn has_credential(&self) -> bool {
        matches!(&self.api_key, Some(key) if !key.is_empty())
    }
}
