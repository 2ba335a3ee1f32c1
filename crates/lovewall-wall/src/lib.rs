//! The wall: item model, item store, drag interaction and local media.

pub mod drag;
pub mod items;
pub mod media;
pub mod rng;
pub mod store;

pub use drag::{DragController, DragKind, DragMove, DragTarget, Pointer, Viewport};
pub use items::{
    ItemKind, Photo, Placement, Sticker, StickyNote, VideoMessage, VoiceNote, WallItem,
};
pub use media::{BlobRegistry, MediaKind, Recording, SelectedFile, VoiceRecorder};
pub use rng::{RandomSource, SeededRandom};
pub use store::{PhotoSource, WallError, WallStore};
