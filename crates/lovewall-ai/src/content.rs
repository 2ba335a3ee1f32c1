//! Wall content features on top of an `AiClient`.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::prompts;
use crate::{AiClient, AiError, InlineImage, TextRequest};

/// Sweet notes, relationship tips and romantic images.
///
/// Text features never fail: an empty result or an error is replaced by a
/// fixed fallback. Image generation has no fallback and returns the error.
#[derive(Clone)]
pub struct ContentService {
    client: Arc<dyn AiClient>,
    note_temperature: f64,
    advice_temperature: f64,
}

impl ContentService {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self {
            client,
            note_temperature: 0.8,
            advice_temperature: 0.7,
        }
    }

    pub fn with_temperatures(mut self, note: f64, advice: f64) -> Self {
        self.note_temperature = note;
        self.advice_temperature = advice;
        self
    }

    /// Suggest a short love note for the given mood or context.
    pub async fn sweet_note(&self, mood: &str) -> String {
        let request = TextRequest::new(prompts::sweet_note_prompt(mood))
            .with_system_instruction(prompts::NOTE_INSTRUCTION)
            .with_temperature(self.note_temperature);

        self.text_or_fallback(
            &request,
            prompts::NOTE_EMPTY_FALLBACK,
            prompts::NOTE_ERROR_FALLBACK,
        )
        .await
    }

    /// One-sentence tip for the given interaction history.
    pub async fn relationship_tip(&self, history: &str) -> String {
        let request = TextRequest::new(prompts::advice_prompt(history))
            .with_system_instruction(prompts::ADVICE_INSTRUCTION)
            .with_temperature(self.advice_temperature);

        self.text_or_fallback(
            &request,
            prompts::ADVICE_EMPTY_FALLBACK,
            prompts::ADVICE_ERROR_FALLBACK,
        )
        .await
    }

    /// Illustration of the described scene.
    pub async fn romantic_image(&self, scene: &str) -> Result<InlineImage, AiError> {
        self.client
            .generate_image(&prompts::image_prompt(scene))
            .await
            .inspect_err(|e| error!("Image generation error: {e}"))
    }

    async fn text_or_fallback(
        &self,
        request: &TextRequest,
        empty_fallback: &str,
        error_fallback: &str,
    ) -> String {
        match self.client.generate_text(request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                debug!("empty generation result, using fallback");
                empty_fallback.to_string()
            }
            Err(e) => {
                warn!("Gemini error: {e}");
                error_fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OfflineClient;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns canned results and records every request.
    struct ScriptedClient {
        text: Result<String, ()>,
        image: Option<InlineImage>,
        seen: Mutex<Vec<TextRequest>>,
        image_prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn text(text: &str) -> Self {
            Self {
                text: Ok(text.to_string()),
                image: None,
                seen: Mutex::new(Vec::new()),
                image_prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                text: Err(()),
                ..Self::text("")
            }
        }

        fn with_image(mut self, image: InlineImage) -> Self {
            self.image = Some(image);
            self
        }
    }

    #[async_trait]
    impl AiClient for ScriptedClient {
        async fn generate_text(&self, request: &TextRequest) -> Result<String, AiError> {
            self.seen.lock().unwrap().push(request.clone());
            self.text
                .clone()
                .map_err(|_| AiError::NetworkError("connection reset".into()))
        }

        async fn generate_image(&self, prompt: &str) -> Result<InlineImage, AiError> {
            self.image_prompts.lock().unwrap().push(prompt.to_string());
            self.image.clone().ok_or(AiError::NoImage)
        }
    }

    #[tokio::test]
    async fn sweet_note_returns_trimmed_text() {
        let client = Arc::new(ScriptedClient::text("  You light up my mornings.  "));
        let service = ContentService::new(client.clone());

        assert_eq!(service.sweet_note("sunny").await, "You light up my mornings.");

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].temperature, Some(0.8));
        assert_eq!(
            seen[0].system_instruction.as_deref(),
            Some(prompts::NOTE_INSTRUCTION)
        );
        assert!(seen[0].prompt.contains("\"sunny\""));
    }

    #[tokio::test]
    async fn sweet_note_empty_result_uses_empty_fallback() {
        let service = ContentService::new(Arc::new(ScriptedClient::text("   ")));
        assert_eq!(service.sweet_note("x").await, prompts::NOTE_EMPTY_FALLBACK);
    }

    #[tokio::test]
    async fn sweet_note_failure_uses_error_fallback() {
        let service = ContentService::new(Arc::new(ScriptedClient::failing()));
        assert_eq!(service.sweet_note("x").await, prompts::NOTE_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn tip_uses_advice_temperature_and_fallbacks() {
        let client = Arc::new(ScriptedClient::text(""));
        let service = ContentService::new(client.clone()).with_temperatures(0.9, 0.2);
        assert_eq!(
            service.relationship_tip("history").await,
            prompts::ADVICE_EMPTY_FALLBACK
        );
        assert_eq!(client.seen.lock().unwrap()[0].temperature, Some(0.2));

        let offline = ContentService::new(Arc::new(OfflineClient::new("disabled")));
        assert_eq!(
            offline.relationship_tip("history").await,
            prompts::ADVICE_ERROR_FALLBACK
        );
    }

    #[tokio::test]
    async fn image_wraps_scene_in_template() {
        let image = InlineImage {
            mime_type: "image/png".into(),
            data: "aGVsbG8=".into(),
        };
        let client = Arc::new(ScriptedClient::text("").with_image(image.clone()));
        let service = ContentService::new(client.clone());

        assert_eq!(service.romantic_image("stargazing").await.unwrap(), image);
        let prompts_seen = client.image_prompts.lock().unwrap();
        assert_eq!(prompts_seen[0], prompts::image_prompt("stargazing"));
    }

    #[tokio::test]
    async fn image_failure_is_propagated() {
        let service = ContentService::new(Arc::new(ScriptedClient::text("")));
        assert!(matches!(
            service.romantic_image("stargazing").await,
            Err(AiError::NoImage)
        ));
    }
}
