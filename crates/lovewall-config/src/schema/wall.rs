//! Wall layout and item placement configuration.

use serde::{Deserialize, Serialize};

/// Rectangle (in percentage coordinates) new items are dropped into.
/// Bounds are half-open: `x_min <= x < x_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SpawnRegion {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x_min..self.x_max).contains(&x) && (self.y_min..self.y_max).contains(&y)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Sticky note colors, `#rrggbb`.
    pub palette: Vec<String>,
    pub stickers: Vec<String>,
    pub note_region: SpawnRegion,
    /// Notes rotate uniformly in `[-note_rotation, note_rotation)` degrees.
    pub note_rotation: f64,
    pub photo_region: SpawnRegion,
    pub photo_rotation: f64,
    pub upload_photo_rotation: f64,
    pub upload_video_rotation: f64,
    /// Where uploaded photos and videos land, `[x, y]`.
    pub upload_position: [f64; 2],
    /// Percent subtracted from the pointer position while dragging (0-50).
    pub drag_offset: f64,
    /// Keep existing notes when a new pairing seeds the wall.
    pub retain_notes_on_pair: bool,
    /// Fixed RNG seed for reproducible placement.
    pub seed: Option<u64>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            palette: ["#fef08a", "#fecaca", "#bfdbfe", "#bbf7d0", "#f5d0fe"]
                .into_iter()
                .map(String::from)
                .collect(),
            stickers: ["❤️", "😘", "🔥", "🥰", "🍭", "✨", "🌹", "🥂"]
                .into_iter()
                .map(String::from)
                .collect(),
            note_region: SpawnRegion::new(30.0, 50.0, 30.0, 50.0),
            note_rotation: 4.0,
            photo_region: SpawnRegion::new(40.0, 50.0, 40.0, 50.0),
            photo_rotation: 6.0,
            upload_photo_rotation: 5.0,
            upload_video_rotation: 3.0,
            upload_position: [50.0, 50.0],
            drag_offset: 10.0,
            retain_notes_on_pair: false,
            seed: None,
        }
    }
}
