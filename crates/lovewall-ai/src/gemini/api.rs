//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, InlineImage, TextRequest};

use super::client::{parse_image_response, parse_text_response, GeminiClient};

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, AiError> {
        let body = self.build_text_body(request);
        let json = self.post(&self.config.text_model, &body).await?;
        let text = parse_text_response(&json)?;
        debug!(chars = text.len(), "Gemini text response");
        Ok(text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<InlineImage, AiError> {
        let body = self.build_image_body(prompt);
        let json = self.post(&self.config.image_model, &body).await?;
        let image = parse_image_response(&json)?;
        debug!(mime = %image.mime_type, "Gemini image response");
        Ok(image)
    }
}
