//! Background generation and file reads. Tasks only send events back.

use std::path::PathBuf;

use tracing::debug;

use lovewall_common::{LoveWallError, SessionId};
use lovewall_wall::SelectedFile;

use super::core::LoveWallApp;
use super::types::AppEvent;

impl LoveWallApp {
    /// Ask for a note suggestion. Ignored while a generation is in flight.
    pub(super) fn request_suggestion(&mut self, mood: String) {
        if self.sender().is_none() {
            return;
        }
        let Some(guard) = self.ai_loading.try_acquire() else {
            debug!("generation already in flight");
            return;
        };
        self.say("Thinking...");
        let content = self.content.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let text = content.sweet_note(&mood).await;
            let _ = events.send(AppEvent::NoteSuggestion(text));
        });
    }

    /// Generate a photo. Ignored while a generation is in flight.
    pub(super) fn request_image(&mut self, prompt: String) {
        if self.sender().is_none() {
            return;
        }
        let Some(session) = self.session.session_id().cloned() else {
            return;
        };
        if prompt.trim().is_empty() {
            debug!("empty photo prompt");
            return;
        }
        let Some(guard) = self.ai_loading.try_acquire() else {
            debug!("generation already in flight");
            return;
        };
        self.say("Developing your photo...");
        let content = self.content.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let _guard = guard;
            let result = content
                .romantic_image(&prompt)
                .await
                .map_err(LoveWallError::from);
            let _ = events.send(AppEvent::ImageReady {
                session,
                prompt,
                result,
            });
        });
    }

    /// Fetch a tip for the banner of the pairing `session`.
    pub(super) fn request_advice(&mut self, session: SessionId, history: String) {
        let content = self.content.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let text = content.relationship_tip(&history).await;
            let _ = events.send(AppEvent::AdviceReady { session, text });
        });
    }

    pub(super) fn request_upload(&mut self, path: PathBuf) {
        if self.sender().is_none() {
            return;
        }
        let max_bytes = u64::from(self.config.media.max_upload_mb) * 1024 * 1024;
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = SelectedFile::read(&path, None, max_bytes)
                .await
                .map_err(LoveWallError::from);
            let _ = events.send(AppEvent::FileLoaded(result));
        });
    }
}

/// Forward stdin lines as `Input` events until end of file.
pub(super) fn spawn_stdin_reader(events: tokio::sync::mpsc::UnboundedSender<AppEvent>) {
    use tokio::io::{AsyncBufReadExt, BufReader};

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if events.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("stdin read failed: {e}");
                    break;
                }
            }
        }
        let _ = events.send(AppEvent::InputClosed);
    });
}
