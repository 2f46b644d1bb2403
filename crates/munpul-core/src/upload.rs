//! File upload — declared-media-type policy and async text decoding.
//!
//! Only files whose declared media type is `text/plain` are accepted; the
//! type is derived from the file extension (the picker's `.txt` filter is a
//! UI hint, the media-type check here is authoritative). Rejection happens
//! before any byte is read.
//!
//! Decoding is the one suspension point in the application: it runs on the
//! runtime, off the UI loop, and completes through whatever channel the
//! caller wires up. On any failure the caller keeps its previous uploaded
//! state untouched and surfaces the error as a notice.

use std::path::Path;
use thiserror::Error;

/// Maximum number of characters kept in the preview text.
pub const PREVIEW_CAP: usize = 500;

/// The only accepted declared media type.
pub const TEXT_PLAIN: &str = "text/plain";

/// Why an upload was refused. All variants are local and recoverable — the
/// user retries with another file.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Declared media type is not plain text. No bytes were read.
    #[error("텍스트 파일(.txt)만 업로드 가능합니다 (got {media_type})")]
    NotPlainText { media_type: String },
    /// The file could not be read at all.
    #[error("could not read file: {0}")]
    Unreadable(#[from] std::io::Error),
    /// The file's bytes are not valid UTF-8 text.
    #[error("file is not valid UTF-8 text")]
    InvalidUtf8,
}

/// A successfully decoded upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Full decoded contents, fed into query composition.
    pub text: String,
    /// First [`PREVIEW_CAP`] characters, for display only.
    pub preview: String,
}

/// Media type declared by a file's extension.
///
/// Unrecognized extensions fall back to `application/octet-stream`, which the
/// upload gate rejects.
pub fn declared_media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("txt") | Some("text") => TEXT_PLAIN,
        Some("md") | Some("markdown") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Load and decode an uploaded file.
///
/// Checks the declared media type first (no read on rejection), then reads
/// the whole file asynchronously and decodes it as UTF-8. The preview is the
/// first [`PREVIEW_CAP`] characters — counted in characters, not bytes, so a
/// Hangul file is never cut mid-glyph.
pub async fn load_file(path: &Path) -> Result<UploadedFile, UploadError> {
    let media_type = declared_media_type(path);
    if media_type != TEXT_PLAIN {
        return Err(UploadError::NotPlainText {
            media_type: media_type.to_string(),
        });
    }

    let bytes = tokio::fs::read(path).await?;
    let text = String::from_utf8(bytes).map_err(|_| UploadError::InvalidUtf8)?;
    let preview = preview_of(&text);
    Ok(UploadedFile { text, preview })
}

/// First [`PREVIEW_CAP`] characters of `text`.
pub fn preview_of(text: &str) -> String {
    text.chars().take(PREVIEW_CAP).collect()
}
