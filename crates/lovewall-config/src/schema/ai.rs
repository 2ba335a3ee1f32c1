//! Generative AI configuration.

use serde::{Deserialize, Serialize};

/// Settings for the Gemini-backed content features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// When false, every request fails locally and text falls back.
    pub enabled: bool,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub text_model: String,
    pub image_model: String,
    /// Temperature for sweet-note suggestions (0.0-2.0).
    pub note_temperature: f64,
    /// Temperature for relationship tips (0.0-2.0).
    pub advice_temperature: f64,
    pub max_tokens: u32,
    /// Request timeout in seconds (5-600).
    pub timeout_secs: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: "GEMINI_API_KEY".into(),
            text_model: "gemini-3-flash-preview".into(),
            image_model: "gemini-2.5-flash-image".into(),
            note_temperature: 0.8,
            advice_temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: 120,
        }
    }
}
