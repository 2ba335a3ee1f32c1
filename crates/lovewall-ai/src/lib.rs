//! Generative content for LoveWall.
//!
//! Provides a Gemini client behind the `AiClient` trait and a
//! `ContentService` that turns raw generation calls into the wall's three
//! content features (sweet notes, relationship tips, romantic images),
//! substituting fixed fallbacks where a failure must not reach the user.

pub mod content;
pub mod gemini;
pub mod offline;
pub mod prompts;

use async_trait::async_trait;
use base64::Engine as _;

pub use content::ContentService;
pub use gemini::{GeminiClient, GeminiConfig};
pub use offline::OfflineClient;

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Run a text completion and return the (trimmed) text, possibly empty.
    async fn generate_text(&self, request: &TextRequest) -> Result<String, AiError>;

    /// Synthesize an image from a scene description.
    async fn generate_image(&self, prompt: &str) -> Result<InlineImage, AiError>;
}

/// A single-turn text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub prompt: String,
    pub system_instruction: Option<String>,
    /// Overrides the client's default temperature.
    pub temperature: Option<f64>,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            temperature: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// An image returned inline (base64) by the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Standard base64, no line breaks.
    pub data: String,
}

impl InlineImage {
    /// `data:` URL suitable for use as an image reference.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Size of the decoded image in bytes.
    pub fn decoded_len(&self) -> Result<usize, AiError> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map(|bytes| bytes.len())
            .map_err(|e| AiError::ParseError(format!("invalid image payload: {e}")))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("No image part found in response")]
    NoImage,
    #[error("AI not configured: {0}")]
    NotConfigured(String),
}

impl From<AiError> for lovewall_common::LoveWallError {
    fn from(e: AiError) -> Self {
        Self::Ai(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_uses_mime_type() {
        let image = InlineImage {
            mime_type: "image/png".into(),
            data: "aGVsbG8=".into(),
        };
        assert_eq!(image.to_data_url(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.decoded_len().unwrap(), 5);
    }

    #[test]
    fn decoded_len_rejects_garbage() {
        let image = InlineImage {
            mime_type: "image/png".into(),
            data: "not base64!!".into(),
        };
        assert!(matches!(image.decoded_len(), Err(AiError::ParseError(_))));
    }

    #[test]
    fn text_request_builder() {
        let req = TextRequest::new("hi")
            .with_system_instruction("be nice")
            .with_temperature(0.3);
        assert_eq!(req.prompt, "hi");
        assert_eq!(req.system_instruction.as_deref(), Some("be nice"));
        assert_eq!(req.temperature, Some(0.3));
    }

    #[test]
    fn no_image_message() {
        assert_eq!(AiError::NoImage.to_string(), "No image part found in response");
    }

    #[test]
    fn converts_into_workspace_error() {
        let err = lovewall_common::LoveWallError::from(AiError::RateLimited);
        assert_eq!(err.to_string(), "ai error: Rate limited");
    }
}
