//! Voice recording and picked files.

use std::time::Duration;

use tracing::{debug, warn};

use lovewall_common::{LoveWallError, MediaError, UserId};
use lovewall_wall::{MediaKind, PhotoSource, SelectedFile};

use super::core::LoveWallApp;
use super::types::{AppEvent, CHUNK_BYTES, MIC_DENIED_ALERT};

impl LoveWallApp {
    pub(super) fn start_recording(&mut self) {
        if self.sender().is_none() {
            return;
        }
        match self.recorder.start(&*self.microphone) {
            Ok(()) => {
                self.spawn_chunk_ticker();
                self.say("Recording... `record stop` to finish.");
            }
            Err(MediaError::AlreadyRecording) => debug!("already recording"),
            Err(MediaError::PermissionDenied) => self.alert(MIC_DENIED_ALERT),
            Err(e) => warn!("recording failed to start: {e}"),
        }
    }

    pub(super) fn stop_recording(&mut self) {
        if !self.recorder.is_recording() {
            debug!("not recording");
            return;
        }
        self.finish_recording();
    }

    /// Stop the capture and turn buffered chunks into a voice note.
    pub(super) fn finish_recording(&mut self) {
        if let Some(ticker) = self.chunk_ticker.take() {
            ticker.abort();
        }
        if !self.recorder.is_recording() {
            return;
        }
        match self.flush_recording() {
            Ok(Some(line)) => self.say(line),
            Ok(None) => {}
            Err(LoveWallError::Media(e)) => warn!("recording failed to stop: {e}"),
            Err(e) => debug!("voice note rejected: {e}"),
        }
    }

    fn flush_recording(&mut self) -> lovewall_common::Result<Option<String>> {
        let recording = self.recorder.stop(&mut self.blobs)?;
        let Some(sender) = self.session.current_user().map(|u| u.id.clone()) else {
            return Ok(None);
        };
        let voice = self.wall.add_voice_note(&sender, &recording)?;
        Ok(Some(format!("Voice note {} ({}s) added.", voice.id, voice.duration)))
    }

    pub(super) fn on_audio_chunk(&mut self, chunk: Vec<u8>) {
        if let Err(e) = self.recorder.push_chunk(chunk) {
            debug!("dropped audio chunk: {e}");
        }
    }

    /// Emit one simulated capture chunk per interval while recording.
    fn spawn_chunk_ticker(&mut self) {
        let period = Duration::from_millis(self.config.media.chunk_interval_ms.max(1));
        let events = self.events.clone();
        let ticker = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if events.send(AppEvent::AudioChunk(vec![0; CHUNK_BYTES])).is_err() {
                    return;
                }
            }
        });
        self.chunk_ticker = Some(ticker);
    }

    pub(super) fn on_file_loaded(&mut self, result: lovewall_common::Result<SelectedFile>) {
        let file = match result {
            Ok(file) => file,
            Err(e) => {
                warn!("upload failed: {e}");
                self.say(format!("Could not add file: {e}"));
                return;
            }
        };
        let Some(sender) = self.sender() else { return };
        match self.store_upload(&sender, file) {
            Ok(line) => self.say(line),
            Err(e) => debug!("upload ignored: {e}"),
        }
    }

    fn store_upload(
        &mut self,
        sender: &UserId,
        file: SelectedFile,
    ) -> lovewall_common::Result<String> {
        let (kind, url) = file.into_blob(&mut self.blobs)?;
        let line = match kind {
            MediaKind::Image => {
                let photo = self.wall.add_photo(sender, PhotoSource::Uploaded { url })?;
                format!("Photo {} added.", photo.id)
            }
            MediaKind::Video => {
                let video = self.wall.add_video(sender, &url)?;
                format!("Video {} added.", video.id)
            }
        };
        Ok(line)
    }
}
