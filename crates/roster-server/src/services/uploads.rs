//! Employee photo storage
//!
//! Files land in the `images` directory under the static root and are served
//! back verbatim by the static file service.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// A file part pulled out of a multipart form
#[derive(Debug, Clone)]
pub struct Upload {
    /// Form field the file arrived in
    pub field: String,
    /// Client-side filename, only its extension is kept
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create images directory: {}", self.dir.display()))
    }

    /// Write the upload and return the generated filename
    pub async fn save(&self, upload: &Upload) -> Result<String> {
        let filename = stored_name(&upload.field, &upload.file_name, Utc::now().timestamp_millis());
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, &upload.bytes)
            .await
            .with_context(|| format!("Failed to save file: {}", path.display()))?;

        tracing::info!(
            original_name = %upload.file_name,
            stored_name = %filename,
            size = upload.bytes.len(),
            "Image stored"
        );

        Ok(filename)
    }
}

/// `<field>_<unix millis><.ext>`; unique only down to the millisecond
fn stored_name(field: &str, original: &str, millis: i64) -> String {
    let ext = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    format!("{}_{}{}", field, millis, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_name_keeps_extension() {
        assert_eq!(
            stored_name("image", "Portrait.JPG", 1700000000123),
            "image_1700000000123.jpg"
        );
        assert_eq!(
            stored_name("image", "archive.tar.gz", 5),
            "image_5.gz"
        );
    }

    #[test]
    fn test_stored_name_without_extension() {
        assert_eq!(stored_name("image", "README", 42), "image_42");
    }

    #[test]
    fn test_stored_name_drops_client_directories() {
        assert_eq!(
            stored_name("image", "../../etc/passwd.png", 1),
            "image_1.png"
        );
    }

    #[tokio::test]
    async fn test_save_writes_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ImageStore::new(tmp.path().join("images"));
        store.ensure_dir().await.unwrap();

        let name = store
            .save(&Upload {
                field: "image".to_string(),
                file_name: "face.png".to_string(),
                bytes: vec![0x89, b'P', b'N', b'G'],
            })
            .await
            .unwrap();

        assert!(name.starts_with("image_"));
        assert!(name.ends_with(".png"));
        let written = std::fs::read(store.dir().join(&name)).unwrap();
        assert_eq!(written, vec![0x89, b'P', b'N', b'G']);
    }
}
