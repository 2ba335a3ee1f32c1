//! Voice recording.
//!
//! The recorder buffers chunks from the capture device while active. On stop
//! the chunks are joined into one blob; the duration is the chunk count over
//! the chunk rate, rounded up to whole seconds.

use tracing::{debug, info};

use lovewall_common::MediaError;

use super::blob::BlobRegistry;

/// Grants or denies access to the capture device.
pub trait Microphone: Send + Sync {
    fn request_access(&self) -> Result<(), MediaError>;
}

/// Microphone whose permission is fixed up front (from config).
#[derive(Debug, Clone, Copy)]
pub struct SimulatedMicrophone {
    pub allowed: bool,
}

impl Microphone for SimulatedMicrophone {
    fn request_access(&self) -> Result<(), MediaError> {
        if self.allowed {
            Ok(())
        } else {
            Err(MediaError::PermissionDenied)
        }
    }
}

/// A finished recording registered in the blob registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub audio_url: String,
    pub mime_type: String,
    pub duration_secs: u32,
    pub chunk_count: usize,
    pub size_bytes: usize,
}

#[derive(Debug)]
pub struct VoiceRecorder {
    chunks_per_second: u32,
    mime_type: String,
    chunks: Option<Vec<Vec<u8>>>,
}

impl VoiceRecorder {
    pub fn new(chunks_per_second: u32, mime_type: impl Into<String>) -> Self {
        Self {
            chunks_per_second: chunks_per_second.max(1),
            mime_type: mime_type.into(),
            chunks: None,
        }
    }

    pub fn start(&mut self, microphone: &dyn Microphone) -> Result<(), MediaError> {
        if self.chunks.is_some() {
            return Err(MediaError::AlreadyRecording);
        }
        microphone.request_access()?;
        self.chunks = Some(Vec::new());
        info!("recording started");
        Ok(())
    }

    pub fn push_chunk(&mut self, chunk: Vec<u8>) -> Result<(), MediaError> {
        let chunks = self.chunks.as_mut().ok_or(MediaError::NotRecording)?;
        chunks.push(chunk);
        Ok(())
    }

    pub fn stop(&mut self, blobs: &mut BlobRegistry) -> Result<Recording, MediaError> {
        let chunks = self.chunks.take().ok_or(MediaError::NotRecording)?;
        let chunk_count = chunks.len();
        let duration_secs = duration_secs(chunk_count, self.chunks_per_second);
        let data = chunks.concat();
        let size_bytes = data.len();
        let audio_url = blobs.register(self.mime_type.clone(), data);
        debug!(chunk_count, duration_secs, size_bytes, "recording stopped");
        Ok(Recording {
            audio_url,
            mime_type: self.mime_type.clone(),
            duration_secs,
            chunk_count,
            size_bytes,
        })
    }

    pub fn is_recording(&self) -> bool {
        self.chunks.is_some()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.as_ref().map_or(0, Vec::len)
    }
}

/// Whole seconds covered by `chunks`, rounded up.
pub fn duration_secs(chunks: usize, chunks_per_second: u32) -> u32 {
    let rate = chunks_per_second.max(1) as usize;
    chunks.div_ceil(rate) as u32
}
