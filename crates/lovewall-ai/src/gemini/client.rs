//! Gemini API client struct, request building, and response parsing.

use tracing::debug;

use crate::{AiError, InlineImage, TextRequest};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AiError::NetworkError(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(model: &str) -> String {
        format!("{GEMINI_API_BASE}/{model}:generateContent")
    }

    /// Build the JSON request body for a text completion.
    pub(crate) fn build_text_body(&self, request: &TextRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": request.temperature.unwrap_or(self.config.temperature),
            }
        });

        if let Some(ref instruction) = request.system_instruction {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": instruction }]
            });
        }

        body
    }

    /// Build the JSON request body for image synthesis.
    pub(crate) fn build_image_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        })
    }

    /// POST a body to `model` and return the decoded JSON.
    pub(crate) async fn post(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, AiError> {
        debug!(model, "Gemini API request");

        let response = self
            .http
            .post(Self::api_url(model))
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))
    }
}

fn first_candidate_parts(json: &serde_json::Value) -> Result<Vec<serde_json::Value>, AiError> {
    let candidates = json["candidates"]
        .as_array()
        .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

    let first = candidates
        .first()
        .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

    Ok(first["content"]["parts"]
        .as_array()
        .cloned()
        .unwrap_or_default())
}

/// Concatenate the text parts of the first candidate, trimmed.
pub(crate) fn parse_text_response(json: &serde_json::Value) -> Result<String, AiError> {
    let parts = first_candidate_parts(json)?;
    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();
    Ok(text.trim().to_string())
}

/// Return the first inline image part of the first candidate.
pub(crate) fn parse_image_response(json: &serde_json::Value) -> Result<InlineImage, AiError> {
    let parts = first_candidate_parts(json)?;

    for part in &parts {
        let Some(inline) = part.get("inlineData") else {
            continue;
        };
        let Some(data) = inline["data"].as_str() else {
            continue;
        };
        let image = InlineImage {
            mime_type: inline["mimeType"].as_str().unwrap_or("image/png").to_string(),
            data: data.to_string(),
        };
        let bytes = image.decoded_len()?;
        debug!(bytes, mime = %image.mime_type, "inline image received");
        return Ok(image);
    }

    Err(AiError::NoImage)
}
