//! Object-store key generation and file-type checks for uploads.

use uuid::Uuid;

use crate::error::CoreError;

/// All uploaded images live under this prefix in the object store.
pub const OBJECT_KEY_PREFIX: &str = "gallery";

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Extract the lowercased extension from an uploaded file name.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate that `ext` is an accepted image extension.
pub fn validate_extension(ext: &str) -> Result<(), CoreError> {
    if ALLOWED_EXTENSIONS.contains(&ext) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported file extension '{ext}'. Must be one of: {ALLOWED_EXTENSIONS:?}"
        )))
    }
}

/// Generate a randomized, unique object key: `gallery/<uuid>.<ext>`.
pub fn object_key(ext: &str) -> String {
    format!("{OBJECT_KEY_PREFIX}/{}.{ext}", Uuid::new_v4())
}

/// MIME type for an accepted extension.
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
