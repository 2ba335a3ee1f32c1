//! Local media: recorded audio, picked files and the blob references that
//! stand in for them on the wall.

mod blob;
mod recorder;
mod upload;

pub use blob::{Blob, BlobRegistry, BLOB_SCHEME};
pub use recorder::{Microphone, Recording, SimulatedMicrophone, VoiceRecorder};
pub use upload::{classify, mime_from_path, MediaKind, SelectedFile};
