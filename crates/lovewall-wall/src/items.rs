//! Wall item types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lovewall_common::{ItemId, Timestamp, UserId};

/// Where an item sits: percentage coordinates plus rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Note,
    Photo,
    Video,
    Sticker,
    VoiceNote,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Note => "note",
            ItemKind::Photo => "photo",
            ItemKind::Video => "video",
            ItemKind::Sticker => "sticker",
            ItemKind::VoiceNote => "voice",
        };
        f.write_str(name)
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "note" => Ok(ItemKind::Note),
            "photo" => Ok(ItemKind::Photo),
            "video" => Ok(ItemKind::Video),
            "sticker" => Ok(ItemKind::Sticker),
            "voice" | "voice_note" => Ok(ItemKind::VoiceNote),
            other => Err(format!("unknown item kind: {other}")),
        }
    }
}

/// Fields shared by every wall item.
pub trait WallItem {
    const KIND: ItemKind;

    fn id(&self) -> &ItemId;
    fn sender_id(&self) -> &UserId;
    fn timestamp(&self) -> Timestamp;
    fn placement(&self) -> &Placement;
    fn placement_mut(&mut self) -> &mut Placement;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: ItemId,
    pub sender_id: UserId,
    pub timestamp: Timestamp,
    pub placement: Placement,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: ItemId,
    pub sender_id: UserId,
    pub timestamp: Timestamp,
    pub placement: Placement,
    pub image_url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMessage {
    pub id: ItemId,
    pub sender_id: UserId,
    pub timestamp: Timestamp,
    pub placement: Placement,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: ItemId,
    pub sender_id: UserId,
    pub timestamp: Timestamp,
    pub placement: Placement,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceNote {
    pub id: ItemId,
    pub sender_id: UserId,
    pub timestamp: Timestamp,
    pub placement: Placement,
    /// Whole seconds.
    pub duration: u32,
    pub audio_url: String,
}

macro_rules! impl_wall_item {
    ($ty:ty, $kind:expr) => {
        impl WallItem for $ty {
            const KIND: ItemKind = $kind;

            fn id(&self) -> &ItemId {
                &self.id
            }

            fn sender_id(&self) -> &UserId {
                &self.sender_id
            }

            fn timestamp(&self) -> Timestamp {
                self.timestamp
            }

            fn placement(&self) -> &Placement {
                &self.placement
            }

            fn placement_mut(&mut self) -> &mut Placement {
                &mut self.placement
            }
        }
    };
}

impl_wall_item!(StickyNote, ItemKind::Note);
impl_wall_item!(Photo, ItemKind::Photo);
impl_wall_item!(VideoMessage, ItemKind::Video);
impl_wall_item!(Sticker, ItemKind::Sticker);
impl_wall_item!(VoiceNote, ItemKind::VoiceNote);
