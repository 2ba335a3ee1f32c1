//! Building the app's collaborators from config.

use std::sync::Arc;

use lovewall_ai::{AiClient, GeminiClient, GeminiConfig, OfflineClient};
use lovewall_config::schema::{AiConfig, SessionConfig};
use lovewall_social::{Roster, User};

/// Gemini client when enabled and a key is present, otherwise an offline
/// client that fails every request.
pub fn build_client(config: &AiConfig) -> Arc<dyn AiClient> {
    if !config.enabled {
        tracing::info!("Generation disabled, running offline");
        return Arc::new(OfflineClient::new("generation disabled"));
    }

    let gemini = GeminiConfig::from_env(&config.api_key_env).and_then(|c| {
        GeminiClient::new(
            c.with_text_model(&config.text_model)
                .with_image_model(&config.image_model)
                .with_max_tokens(config.max_tokens)
                .with_timeout_secs(u64::from(config.timeout_secs)),
        )
    });
    match gemini {
        Ok(client) => {
            tracing::info!(
                text_model = %config.text_model,
                image_model = %config.image_model,
                "Gemini client ready"
            );
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!("Gemini not configured, running offline: {e}");
            Arc::new(OfflineClient::new(e.to_string()))
        }
    }
}

/// Roster from the configured members. Missing avatars come from the
/// avatar template.
pub(super) fn build_roster(config: &SessionConfig) -> Roster {
    let members = config
        .members
        .iter()
        .map(|m| {
            let avatar = if m.avatar.is_empty() {
                config.avatar_template.replace("{name}", &m.name)
            } else {
                m.avatar.clone()
            };
            User::new(m.id.as_str(), m.name.as_str(), avatar)
        })
        .collect();
    Roster::new(members)
}
