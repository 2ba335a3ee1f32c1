//! Voice recording and upload configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Whether the simulated microphone grants access.
    pub microphone_allowed: bool,
    /// Recorder chunks emitted per second of audio (1-20).
    pub chunks_per_second: u32,
    /// Interval between chunks in milliseconds (50-5000).
    pub chunk_interval_ms: u64,
    pub audio_mime: String,
    /// Upload size limit in megabytes (1-1024).
    pub max_upload_mb: u32,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            microphone_allowed: true,
            chunks_per_second: 2,
            chunk_interval_ms: 500,
            audio_mime: "audio/webm".into(),
            max_upload_mb: 64,
        }
    }
}
