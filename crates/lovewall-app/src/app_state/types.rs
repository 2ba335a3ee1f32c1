//! Internal types and constants for the app state module.

use lovewall_ai::InlineImage;
use lovewall_common::SessionId;
use lovewall_social::GeoReading;
use lovewall_wall::SelectedFile;

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// A line typed by the user.
    Input(String),
    /// stdin reached end of file.
    InputClosed,
    /// A generated note suggestion for the draft.
    NoteSuggestion(String),
    /// An image generation request issued during `session` finished.
    ImageReady {
        session: SessionId,
        prompt: String,
        result: lovewall_common::Result<InlineImage>,
    },
    /// A relationship tip for the banner of `session`.
    AdviceReady { session: SessionId, text: String },
    /// One chunk from the capture device.
    AudioChunk(Vec<u8>),
    /// A picked file was read from disk.
    FileLoaded(lovewall_common::Result<SelectedFile>),
    /// A position reading forwarded by the location watch.
    Geo(GeoReading),
}

pub(super) const IMAGE_FAILED_ALERT: &str = "Failed to generate magic moment.";
pub(super) const MIC_DENIED_ALERT: &str = "Mic permission required.";
pub(super) const WELCOME_ADVICE: &str = "Welcome to the circle...";

/// Size of one simulated capture chunk.
pub(super) const CHUNK_BYTES: usize = 1024;
