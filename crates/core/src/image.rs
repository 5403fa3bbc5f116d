//! Selected-file handling: previews and base64 data-URL encoding.
//!
//! The preview is updated immediately from a local object URL; the encoded
//! representation is produced only at submit time, when the payload is built.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Image shown when an entity has no image yet.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/default-image.png";

/// Content type used in the data URL when none could be determined.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is empty", .0.display())]
    Empty(PathBuf),
}

// ---------------------------------------------------------------------------
// SelectedFile
// ---------------------------------------------------------------------------

/// A file chosen in the form's image input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    content_type: Option<String>,
}

impl SelectedFile {
    /// Select a file, guessing its content type from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = mime_guess::from_path(&path)
            .first_raw()
            .map(str::to_string);
        Self { path, content_type }
    }

    /// Select a file whose content type is already known.
    pub fn with_content_type(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: Some(content_type.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// File name as shown in the image input.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the content type says this is an image.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }

    /// Local URL for an immediate preview, without reading the file.
    pub fn object_url(&self) -> String {
        let absolute = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());
        format!("file://{}", absolute.display())
    }
}

/// Read `file` and encode it as `data:<content type>;base64,<bytes>`.
pub async fn encode_data_url(file: &SelectedFile) -> Result<String, ImageError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| ImageError::Read {
            path: file.path.clone(),
            source,
        })?;
    if bytes.is_empty() {
        return Err(ImageError::Empty(file.path.clone()));
    }

    let content_type = file.content_type().unwrap_or(FALLBACK_CONTENT_TYPE);
    Ok(format!(
        "data:{content_type};base64,{}",
        STANDARD.encode(&bytes)
    ))
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// What the form's preview box currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Placeholder,
    /// Image already stored on the backend (or just encoded for it).
    Stored(String),
    /// Local object URL of a freshly selected file.
    Local(String),
}

impl Preview {
    /// Source string for the preview image element.
    pub fn src(&self) -> &str {
        match self {
            Preview::Placeholder => PLACEHOLDER_IMAGE,
            Preview::Stored(src) | Preview::Local(src) => src,
        }
    }
}
