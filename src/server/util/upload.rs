//! On-disk storage for uploaded menu PDFs and gallery images.
//!
//! Files live under `<upload_dir>/<kind>/<uuid>.<ext>` and are served
//! read-only from `/uploads/<kind>/<uuid>.<ext>`.

use std::path::{Path, PathBuf};

use mime_guess::mime;
use uuid::Uuid;

/// URL prefix under which the upload directory is served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Sub-directory for menu PDFs.
pub const MENU_DIR: &str = "menu";
/// Sub-directory for gallery images.
pub const GALLERY_DIR: &str = "gallery";

const PDF_MAGIC: &[u8] = b"%PDF-";

/// A file written by [`UploadStore::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    /// Generated file name, unique within its sub-directory.
    pub filename: String,
    /// Public URL of the file.
    pub url: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, kind: &str, filename: &str) -> PathBuf {
        self.root.join(kind).join(filename)
    }

    pub fn url(kind: &str, filename: &str) -> String {
        format!("{}/{}/{}", UPLOADS_ROUTE, kind, filename)
    }

    /// Writes `bytes` under a fresh uuid name with the given extension.
    pub async fn save(
        &self,
        kind: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, std::io::Error> {
        let dir = self.root.join(kind);
        tokio::fs::create_dir_all(&dir).await?;

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(dir.join(&filename), bytes).await?;

        tracing::debug!("Stored upload {}/{} ({} bytes)", kind, filename, bytes.len());

        Ok(StoredFile {
            url: Self::url(kind, &filename),
            filename,
            size: bytes.len() as u64,
        })
    }

    /// Deletes a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, kind: &str, filename: &str) -> Result<(), std::io::Error> {
        match tokio::fs::remove_file(self.path(kind, filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Checks the `%PDF-` header.
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Lower-cased extension of `file_name` when it names an image type.
pub fn image_extension(file_name: &str) -> Option<String> {
    let guess = mime_guess::from_path(file_name).first()?;
    if guess.type_() != mime::IMAGE {
        return None;
    }

    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
