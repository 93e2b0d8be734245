//! Error types for the slicing pipeline.

use std::path::PathBuf;

use crate::model::GeometryError;

#[derive(Debug, thiserror::Error)]
pub enum SliceError {
    /// Input root is neither a directory nor a readable archive.
    #[error("expected either a directory or a .zip archive, got {}", .0.display())]
    InvalidInput(PathBuf),

    /// A declared atlas is absent from the input tree.
    #[error("atlas {0} not found")]
    MissingAtlas(String),

    /// A declared region cannot be mapped onto the actual atlas.
    #[error("invalid region for {target}: {source}")]
    InvalidGeometry {
        target: String,
        #[source]
        source: GeometryError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// Malformed catalog document.
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SliceError>;
