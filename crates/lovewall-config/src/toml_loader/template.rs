//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# LoveWall Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[ai]
# enabled = true
# api_key_env = "GEMINI_API_KEY"   # API_KEY is tried when this is unset
# text_model = "gemini-3-flash-preview"
# image_model = "gemini-2.5-flash-image"
# note_temperature = 0.8           # 0.0-2.0
# advice_temperature = 0.7         # 0.0-2.0
# max_tokens = 1024
# timeout_secs = 120               # 5-600

[wall]
# palette = ["#fef08a", "#fecaca", "#bfdbfe", "#bbf7d0", "#f5d0fe"]
# note_rotation = 4.0              # degrees, 0-45
# photo_rotation = 6.0
# upload_position = [50.0, 50.0]
# drag_offset = 10.0               # 0-50
# retain_notes_on_pair = false
# seed = 42                        # fixed placement for demos

# [wall.note_region]
# x_min = 30.0
# x_max = 50.0
# y_min = 30.0
# y_max = 50.0

[session]
# default_user = "u1"
# greeting = "Hey {name}! Glad we connected."
#
# [[session.members]]
# id = "u1"
# name = "Alex"

[location]
# enabled = true
# partner_source = "mirror"        # "mirror" or "external" (fed by `partner-geo`)
# partner_offset_lat = 0.0005
# partner_offset_lng = -0.0005
# high_accuracy = true             # advisory, reported when the watch starts

[media]
# microphone_allowed = true
# chunks_per_second = 2            # 1-20
# chunk_interval_ms = 500          # 50-5000
# audio_mime = "audio/webm"
# max_upload_mb = 64               # 1-1024

[logging]
# level = "INFO"                   # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
