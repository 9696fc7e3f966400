//! Error types for icon resizing.

use std::path::PathBuf;
use thiserror::Error;

/// Checklist printed after a failed decode or write.
pub const REMEDIATION_HINT: &str = "\
Make sure that:
1. The input is a valid image (PNG, JPG, ...)
2. The binary was built with the image codec for that format
3. The 'public' directory exists";

#[derive(Error, Debug)]
pub enum ResizeError {
    /// The input path does not exist.
    #[error("file {} not found", path.display())]
    NotFound { path: PathBuf },

    /// The input exists but could not be read or parsed as an image.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A resized icon could not be persisted.
    #[error("failed to write icon {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ResizeError {
    /// The remediation checklist to show alongside this error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ResizeError::NotFound { .. } => None,
            ResizeError::Decode { .. } | ResizeError::Write { .. } => Some(REMEDIATION_HINT),
        }
    }
}

pub type Result<T, E = ResizeError> = std::result::Result<T, E>;
