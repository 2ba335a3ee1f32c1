//! Wall layout validation.

use super::helpers::{is_hex_color, validate_range_f64};
use crate::schema::{LoveWallConfig, SpawnRegion};

pub(super) fn validate_wall(errors: &mut Vec<String>, config: &LoveWallConfig) {
    let wall = &config.wall;

    if wall.palette.is_empty() {
        errors.push("wall.palette must not be empty".into());
    }
    for color in &wall.palette {
        if !is_hex_color(color) {
            errors.push(format!("wall.palette entry {color:?} is not a #rrggbb color"));
        }
    }
    if wall.stickers.iter().any(|s| s.trim().is_empty()) {
        errors.push("wall.stickers must not contain blank entries".into());
    }

    validate_region(errors, "wall.note_region", &wall.note_region);
    validate_region(errors, "wall.photo_region", &wall.photo_region);

    validate_range_f64(errors, "wall.note_rotation", wall.note_rotation, 0.0, 45.0);
    validate_range_f64(errors, "wall.photo_rotation", wall.photo_rotation, 0.0, 45.0);
    validate_range_f64(
        errors,
        "wall.upload_photo_rotation",
        wall.upload_photo_rotation,
        0.0,
        45.0,
    );
    validate_range_f64(
        errors,
        "wall.upload_video_rotation",
        wall.upload_video_rotation,
        0.0,
        45.0,
    );
    validate_range_f64(errors, "wall.upload_position.x", wall.upload_position[0], 0.0, 100.0);
    validate_range_f64(errors, "wall.upload_position.y", wall.upload_position[1], 0.0, 100.0);
    validate_range_f64(errors, "wall.drag_offset", wall.drag_offset, 0.0, 50.0);
}

fn validate_region(errors: &mut Vec<String>, name: &str, region: &SpawnRegion) {
    validate_range_f64(errors, &format!("{name}.x_min"), region.x_min, 0.0, 100.0);
    validate_range_f64(errors, &format!("{name}.x_max"), region.x_max, 0.0, 100.0);
    validate_range_f64(errors, &format!("{name}.y_min"), region.y_min, 0.0, 100.0);
    validate_range_f64(errors, &format!("{name}.y_max"), region.y_max, 0.0, 100.0);
    if region.x_min >= region.x_max || region.y_min >= region.y_max {
        errors.push(format!("{name} must have min < max on both axes"));
    }
}
