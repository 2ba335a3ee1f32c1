//! Picking local photos and videos.

use std::path::{Path, PathBuf};

use tracing::debug;

use lovewall_common::MediaError;

use super::blob::BlobRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Image or video by MIME type; anything else is unsupported.
pub fn classify(mime_type: &str) -> Option<MediaKind> {
    let mime = mime_type.trim().to_ascii_lowercase();
    if mime.starts_with("image/") {
        Some(MediaKind::Image)
    } else if mime.starts_with("video/") {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// MIME type guessed from the file extension.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "svg" => "image/svg+xml",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

/// A file chosen from disk, loaded into memory.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    /// Read `path`, refusing files over `max_bytes`.
    ///
    /// `declared_mime` wins over the extension guess.
    pub async fn read(
        path: &Path,
        declared_mime: Option<&str>,
        max_bytes: u64,
    ) -> Result<Self, MediaError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| MediaError::Read(format!("{}: {e}", path.display())))?;
        if meta.len() > max_bytes {
            return Err(MediaError::TooLarge {
                size: meta.len(),
                limit: max_bytes,
            });
        }
        let mime_type = declared_mime
            .map(str::to_string)
            .or_else(|| mime_from_path(path).map(str::to_string))
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| MediaError::Read(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), mime = %mime_type, bytes = data.len(), "file selected");
        Ok(Self {
            path: path.to_path_buf(),
            mime_type,
            data,
        })
    }

    pub fn kind(&self) -> Option<MediaKind> {
        classify(&self.mime_type)
    }

    /// Register the file as a blob. Unsupported types are refused.
    pub fn into_blob(self, blobs: &mut BlobRegistry) -> Result<(MediaKind, String), MediaError> {
        let kind = self
            .kind()
            .ok_or_else(|| MediaError::UnsupportedType(self.mime_type.clone()))?;
        let url = blobs.register(self.mime_type, self.data);
        Ok((kind, url))
    }
}
