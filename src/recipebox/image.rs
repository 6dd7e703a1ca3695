//! Image files to `data:` URLs and back to a short description.
//!
//! Recipes keep their picture inline as a base64 `data:` URL, so a catalog is a
//! single self-contained value. Encoding either yields a complete URL or an
//! [`RecipeError::Image`]; a recipe is never created from a half-read file.

use crate::error::{RecipeError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;
use std::fs;
use std::path::Path;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Media type guessed from the file extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => FALLBACK_MEDIA_TYPE,
    }
}

pub fn encode_bytes(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64.encode(bytes))
}

/// Reads `path` and encodes it as a `data:` URL.
pub fn encode_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| RecipeError::Image {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if bytes.is_empty() {
        return Err(RecipeError::Image {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }
    Ok(encode_bytes(media_type_for(path), &bytes))
}

/// What the renderer shows in place of the picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    pub media_type: String,
    pub bytes: usize,
}

/// Describes a stored image value. `None` for recipes without one or for values
/// that are not base64 `data:` URLs.
pub fn summarize(image: &str) -> Option<ImageSummary> {
    let rest = image.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let media_type = meta.strip_suffix(";base64")?;
    let bytes = BASE64.decode(payload.trim()).ok()?.len();
    Some(ImageSummary {
        media_type: if media_type.is_empty() {
            "text/plain".to_string()
        } else {
            media_type.to_string()
        },
        bytes,
    })
}
