use chrono::Utc;
use error_stack::{Result, ResultExt};
use mime::Mime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config;

/// Hard cap on thumbnail uploads.
pub const MAX_IMAGE_SIZE: usize = 2 * 1024 * 1024;

const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

static UNSAFE_FILE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9.-]").expect("hardcoded regex must compile"));

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Image is required")]
    Missing,
    #[error("Invalid image type. Only JPG, PNG, and WEBP allowed")]
    UnsupportedType,
    #[error("Image size must be less than 2MB")]
    TooLarge,
    #[error("Could not store uploaded image")]
    Store,
}

/// An uploaded thumbnail image, decoded from the multipart create-post
/// form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<Mime>,
    pub data: Vec<u8>,
}

impl ImageUpload {
    /// Checks presence, content type and size, in that order. Nothing is
    /// written to disk until validation passes.
    pub fn validate(&self) -> std::result::Result<(), UploadError> {
        if self.data.is_empty() {
            return Err(UploadError::Missing);
        }

        let allowed = self
            .content_type
            .as_ref()
            .is_some_and(|mime| ALLOWED_IMAGE_TYPES.contains(&mime.essence_str()));
        if !allowed {
            return Err(UploadError::UnsupportedType);
        }

        if self.data.len() > MAX_IMAGE_SIZE {
            return Err(UploadError::TooLarge);
        }

        Ok(())
    }

    /// Validates, then persists the image under the upload directory with
    /// a collision-avoiding name. Returns the public URL of the stored
    /// file.
    #[tracing::instrument(skip_all, name = "uploads.store")]
    pub fn store(&self, cfg: &config::Uploads) -> Result<String, UploadError> {
        self.validate()?;

        let original = self.file_name.as_deref().unwrap_or("image");
        let file_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(original)
        );

        std::fs::create_dir_all(&cfg.dir)
            .change_context(UploadError::Store)
            .attach_printable_lazy(|| format!("could not create {}", cfg.dir.display()))?;

        let path = cfg.dir.join(&file_name);
        std::fs::write(&path, &self.data)
            .change_context(UploadError::Store)
            .attach_printable_lazy(|| format!("could not write {}", path.display()))?;

        Ok(format!("{}/{}", cfg.public_prefix, file_name))
    }
}

/// Keeps only characters that are safe in a stored file name.
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_FILE_NAME_CHARS.replace_all(name, "_").into_owned()
}

/// Resolves a thumbnail URL to its on-disk path, but only when it lives
/// under the managed public prefix. Anything else (external URLs, paths
/// escaping the upload directory) is not ours to touch.
pub fn managed_file_path(cfg: &config::Uploads, thumbnail_url: &str) -> Option<PathBuf> {
    let prefix = format!("{}/", cfg.public_prefix);
    let file_name = thumbnail_url.strip_prefix(&prefix)?;

    let candidate = Path::new(file_name);
    let is_bare_file_name = candidate.components().count() == 1
        && candidate
            .components()
            .all(|c| matches!(c, std::path::Component::Normal(_)));
    if !is_bare_file_name {
        return None;
    }

    Some(cfg.dir.join(file_name))
}

/// Best-effort removal of a managed thumbnail file. Failures are logged
/// and swallowed; a missing file never fails the caller.
pub fn remove_managed_file(cfg: &config::Uploads, thumbnail_url: &str) {
    let Some(path) = managed_file_path(cfg, thumbnail_url) else {
        return;
    };

    if let Err(error) = std::fs::remove_file(&path) {
        tracing::warn!(%error, path = %path.display(), "failed to delete thumbnail file");
    }
}
