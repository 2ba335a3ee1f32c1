use std::collections::HashMap;

use tracing::debug;

use lovewall_common::new_id;

pub const BLOB_SCHEME: &str = "blob:lovewall/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// In-memory object store handing out `blob:lovewall/<uuid>` references.
#[derive(Debug, Default)]
pub struct BlobRegistry {
    blobs: HashMap<String, Blob>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, mime_type: impl Into<String>, data: Vec<u8>) -> String {
        let url = format!("{BLOB_SCHEME}{}", new_id());
        let blob = Blob {
            mime_type: mime_type.into(),
            data,
        };
        debug!(%url, mime = %blob.mime_type, bytes = blob.data.len(), "blob registered");
        self.blobs.insert(url.clone(), blob);
        url
    }

    pub fn get(&self, url: &str) -> Option<&Blob> {
        self.blobs.get(url)
    }

    pub fn revoke(&mut self, url: &str) -> bool {
        self.blobs.remove(url).is_some()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_fetch() {
        let mut blobs = BlobRegistry::new();
        let url = blobs.register("audio/webm", vec![1, 2, 3]);
        assert!(url.starts_with(BLOB_SCHEME));
        let blob = blobs.get(&url).unwrap();
        assert_eq!(blob.mime_type, "audio/webm");
        assert_eq!(blob.data, vec![1, 2, 3]);
    }

    #[test]
    fn urls_are_unique() {
        let mut blobs = BlobRegistry::new();
        let a = blobs.register("image/png", Vec::new());
        let b = blobs.register("image/png", Vec::new());
        assert_ne!(a, b);
        assert_eq!(blobs.len(), 2);
    }

    #[test]
    fn revoke_removes() {
        let mut blobs = BlobRegistry::new();
        let url = blobs.register("video/mp4", vec![0]);
        assert!(blobs.revoke(&url));
        assert!(!blobs.revoke(&url));
        assert!(blobs.is_empty());
    }
}
