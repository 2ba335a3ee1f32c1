//! Client used when generation is disabled or no API key is available.

use async_trait::async_trait;

use crate::{AiClient, AiError, InlineImage, TextRequest};

/// Fails every request with `NotConfigured`, so text features fall back and
/// image generation surfaces an error.
#[derive(Debug, Clone)]
pub struct OfflineClient {
    reason: String,
}

impl OfflineClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl AiClient for OfflineClient {
    async fn generate_text(&self, _request: &TextRequest) -> Result<String, AiError> {
        Err(AiError::NotConfigured(self.reason.clone()))
    }

    async fn generate_image(&self, _prompt: &str) -> Result<InlineImage, AiError> {
        Err(AiError::NotConfigured(self.reason.clone()))
    }
}
