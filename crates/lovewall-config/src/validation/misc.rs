//! Validation for the smaller sections: ai, location, media.

use super::helpers::{validate_range, validate_range_f64};
use crate::schema::LoveWallConfig;

pub(super) fn validate_ai(errors: &mut Vec<String>, config: &LoveWallConfig) {
    let ai = &config.ai;
    validate_range_f64(errors, "ai.note_temperature", ai.note_temperature, 0.0, 2.0);
    validate_range_f64(errors, "ai.advice_temperature", ai.advice_temperature, 0.0, 2.0);
    validate_range(errors, "ai.timeout_secs", ai.timeout_secs.into(), 5, 600);
    validate_range(errors, "ai.max_tokens", ai.max_tokens.into(), 1, 65_536);
    if ai.text_model.trim().is_empty() || ai.image_model.trim().is_empty() {
        errors.push("ai.text_model and ai.image_model must be set".into());
    }
}

pub(super) fn validate_location(errors: &mut Vec<String>, config: &LoveWallConfig) {
    let location = &config.location;
    validate_range_f64(
        errors,
        "location.partner_offset_lat",
        location.partner_offset_lat,
        -1.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "location.partner_offset_lng",
        location.partner_offset_lng,
        -1.0,
        1.0,
    );
}

pub(super) fn validate_media(errors: &mut Vec<String>, config: &LoveWallConfig) {
    let media = &config.media;
    validate_range(errors, "media.chunks_per_second", media.chunks_per_second.into(), 1, 20);
    validate_range(errors, "media.chunk_interval_ms", media.chunk_interval_ms, 50, 5000);
    validate_range(errors, "media.max_upload_mb", media.max_upload_mb.into(), 1, 1024);
    if !media.audio_mime.starts_with("audio/") {
        errors.push(format!(
            "media.audio_mime {:?} must be an audio/* type",
            media.audio_mime
        ));
    }
}
