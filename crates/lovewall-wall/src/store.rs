//! In-memory wall item store.
//!
//! Items are created by user action, moved by drag, and never deleted one
//! by one. Placement randomness comes from a `RandomSource` and every
//! timestamp from the injected `Clock`.

use std::sync::Arc;

use tracing::debug;

use lovewall_common::{Clock, ItemId, LoveWallError, SystemClock, UserId};
use lovewall_config::schema::{SpawnRegion, WallConfig};

use crate::drag::DragMove;
use crate::items::{
    ItemKind, Photo, Placement, Sticker, StickyNote, VideoMessage, VoiceNote, WallItem,
};
use crate::media::Recording;
use crate::rng::{self, RandomSource, SeededRandom};

/// Color, rotation and position of the note seeded into a new pairing.
pub const SEED_NOTE_COLOR: &str = "#fef08a";
pub const SEED_NOTE_PLACEMENT: Placement = Placement {
    x: 20.0,
    y: 15.0,
    rotation: -2.0,
};

/// Caption given to photos uploaded from a local file.
pub const UPLOAD_CAPTION: &str = "Moment Captured";

const FALLBACK_COLOR: &str = SEED_NOTE_COLOR;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WallError {
    #[error("note text is empty")]
    EmptyText,

    #[error("media reference is empty")]
    EmptyReference,

    #[error("no sticker available")]
    NoSticker,
}

impl From<WallError> for LoveWallError {
    fn from(e: WallError) -> Self {
        Self::Wall(e.to_string())
    }
}

/// Where a photo comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoSource {
    /// Generated from a prompt; the prompt becomes the caption.
    Generated { image_url: String, prompt: String },
    /// A local file the user picked.
    Uploaded { url: String },
}

pub struct WallStore {
    layout: WallConfig,
    rng: Box<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    notes: Vec<StickyNote>,
    photos: Vec<Photo>,
    videos: Vec<VideoMessage>,
    stickers: Vec<Sticker>,
    voice_notes: Vec<VoiceNote>,
}

impl WallStore {
    /// Store seeded from `layout.seed` (entropy when unset), system clock.
    pub fn new(layout: WallConfig) -> Self {
        let rng = Box::new(SeededRandom::new(layout.seed));
        Self::with_parts(layout, rng, Arc::new(SystemClock))
    }

    pub fn with_parts(
        layout: WallConfig,
        rng: Box<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            layout,
            rng,
            clock,
            notes: Vec::new(),
            photos: Vec::new(),
            videos: Vec::new(),
            stickers: Vec::new(),
            voice_notes: Vec::new(),
        }
    }

    pub fn layout(&self) -> &WallConfig {
        &self.layout
    }

    // -- creation -----------------------------------------------------------

    pub fn add_note(&mut self, sender: &UserId, text: &str) -> Result<&StickyNote, WallError> {
        if text.trim().is_empty() {
            debug!(sender = %sender, "rejected empty note");
            return Err(WallError::EmptyText);
        }
        let color = rng::pick(self.rng.as_mut(), &self.layout.palette)
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOR.to_string());
        let rotation = rng::symmetric(self.rng.as_mut(), self.layout.note_rotation);
        let placement = self.scatter(self.layout.note_region, rotation);
        let note = StickyNote {
            id: ItemId::generate(),
            sender_id: sender.clone(),
            timestamp: self.clock.now_millis(),
            placement,
            text: text.to_string(),
            color,
        };
        debug!(id = %note.id, sender = %sender, "note added");
        Ok(push(&mut self.notes, note))
    }

    pub fn add_photo(&mut self, sender: &UserId, source: PhotoSource) -> Result<&Photo, WallError> {
        let (image_url, caption, placement) = match source {
            PhotoSource::Generated { image_url, prompt } => {
                let rotation = rng::symmetric(self.rng.as_mut(), self.layout.photo_rotation);
                let placement = self.scatter(self.layout.photo_region, rotation);
                (image_url, prompt, placement)
            }
            PhotoSource::Uploaded { url } => {
                let rotation =
                    rng::symmetric(self.rng.as_mut(), self.layout.upload_photo_rotation);
                (url, UPLOAD_CAPTION.to_string(), self.upload_placement(rotation))
            }
        };
        if image_url.is_empty() {
            return Err(WallError::EmptyReference);
        }
        let photo = Photo {
            id: ItemId::generate(),
            sender_id: sender.clone(),
            timestamp: self.clock.now_millis(),
            placement,
            image_url,
            caption,
        };
        debug!(id = %photo.id, sender = %sender, "photo added");
        Ok(push(&mut self.photos, photo))
    }

    pub fn add_video(&mut self, sender: &UserId, url: &str) -> Result<&VideoMessage, WallError> {
        if url.is_empty() {
            return Err(WallError::EmptyReference);
        }
        let rotation = rng::symmetric(self.rng.as_mut(), self.layout.upload_video_rotation);
        let video = VideoMessage {
            id: ItemId::generate(),
            sender_id: sender.clone(),
            timestamp: self.clock.now_millis(),
            placement: self.upload_placement(rotation),
            video_url: url.to_string(),
            thumbnail_url: None,
        };
        debug!(id = %video.id, sender = %sender, "video added");
        Ok(push(&mut self.videos, video))
    }

    /// Add a sticker. With no emoji given, one is drawn from the sticker set.
    pub fn add_sticker(
        &mut self,
        sender: &UserId,
        emoji: Option<&str>,
    ) -> Result<&Sticker, WallError> {
        let emoji = match emoji.map(str::trim).filter(|e| !e.is_empty()) {
            Some(emoji) => emoji.to_string(),
            None => rng::pick(self.rng.as_mut(), &self.layout.stickers)
                .cloned()
                .ok_or(WallError::NoSticker)?,
        };
        let rotation = rng::symmetric(self.rng.as_mut(), self.layout.note_rotation);
        let sticker = Sticker {
            id: ItemId::generate(),
            sender_id: sender.clone(),
            timestamp: self.clock.now_millis(),
            placement: self.scatter(self.layout.note_region, rotation),
            emoji,
        };
        debug!(id = %sticker.id, emoji = %sticker.emoji, "sticker added");
        Ok(push(&mut self.stickers, sticker))
    }

    pub fn add_voice_note(
        &mut self,
        sender: &UserId,
        recording: &Recording,
    ) -> Result<&VoiceNote, WallError> {
        if recording.audio_url.is_empty() {
            return Err(WallError::EmptyReference);
        }
        let rotation = rng::symmetric(self.rng.as_mut(), self.layout.note_rotation);
        let voice = VoiceNote {
            id: ItemId::generate(),
            sender_id: sender.clone(),
            timestamp: self.clock.now_millis(),
            placement: self.scatter(self.layout.note_region, rotation),
            duration: recording.duration_secs,
            audio_url: recording.audio_url.clone(),
        };
        debug!(id = %voice.id, duration = voice.duration, "voice note added");
        Ok(push(&mut self.voice_notes, voice))
    }

    /// Seed a fresh pairing with a greeting from the partner.
    ///
    /// Replaces the notes unless `retain_notes_on_pair` is set.
    pub fn seed_pairing(&mut self, partner: &UserId, greeting: &str) -> &StickyNote {
        if !self.layout.retain_notes_on_pair {
            self.notes.clear();
        }
        let note = StickyNote {
            id: ItemId::generate(),
            sender_id: partner.clone(),
            timestamp: self.clock.now_millis(),
            placement: SEED_NOTE_PLACEMENT,
            text: greeting.to_string(),
            color: SEED_NOTE_COLOR.to_string(),
        };
        push(&mut self.notes, note)
    }

    // -- movement -----------------------------------------------------------

    /// Move the item with `id`, whatever its kind. Returns whether one matched.
    pub fn update_position(&mut self, id: &ItemId, x: f64, y: f64) -> bool {
        [
            ItemKind::Note,
            ItemKind::Photo,
            ItemKind::Video,
            ItemKind::Sticker,
            ItemKind::VoiceNote,
        ]
        .into_iter()
        .any(|kind| self.move_item(kind, id, x, y))
    }

    /// Move an item within a single collection.
    pub fn move_item(&mut self, kind: ItemKind, id: &ItemId, x: f64, y: f64) -> bool {
        let moved = match kind {
            ItemKind::Note => reposition(&mut self.notes, id, x, y),
            ItemKind::Photo => reposition(&mut self.photos, id, x, y),
            ItemKind::Video => reposition(&mut self.videos, id, x, y),
            ItemKind::Sticker => reposition(&mut self.stickers, id, x, y),
            ItemKind::VoiceNote => reposition(&mut self.voice_notes, id, x, y),
        };
        if !moved {
            debug!(%kind, %id, "no item to move");
        }
        moved
    }

    pub fn apply_drag(&mut self, drag: &DragMove) -> bool {
        self.move_item(drag.target.kind.into(), &drag.target.id, drag.x, drag.y)
    }

    // -- accessors ----------------------------------------------------------

    pub fn notes(&self) -> &[StickyNote] {
        &self.notes
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn videos(&self) -> &[VideoMessage] {
        &self.videos
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    pub fn voice_notes(&self) -> &[VoiceNote] {
        &self.voice_notes
    }

    /// Kind and placement of the item with `id`.
    pub fn find(&self, id: &ItemId) -> Option<(ItemKind, Placement)> {
        locate(&self.notes, id)
            .or_else(|| locate(&self.photos, id))
            .or_else(|| locate(&self.videos, id))
            .or_else(|| locate(&self.stickers, id))
            .or_else(|| locate(&self.voice_notes, id))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
            + self.photos.len()
            + self.videos.len()
            + self.stickers.len()
            + self.voice_notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn scatter(&mut self, region: SpawnRegion, rotation: f64) -> Placement {
        Placement {
            x: rng::in_range(self.rng.as_mut(), region.x_min, region.x_max),
            y: rng::in_range(self.rng.as_mut(), region.y_min, region.y_max),
            rotation,
        }
    }

    fn upload_placement(&self, rotation: f64) -> Placement {
        let [x, y] = self.layout.upload_position;
        Placement { x, y, rotation }
    }
}

fn push<T>(items: &mut Vec<T>, item: T) -> &T {
    items.push(item);
    &items[items.len() - 1]
}

fn reposition<T: WallItem>(items: &mut [T], id: &ItemId, x: f64, y: f64) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            let placement = item.placement_mut();
            placement.x = x;
            placement.y = y;
            true
        }
        None => false,
    }
}

fn locate<T: WallItem>(items: &[T], id: &ItemId) -> Option<(ItemKind, Placement)> {
    items
        .iter()
        .find(|item| item.id() == id)
        .map(|item| (T::KIND, *item.placement()))
}
