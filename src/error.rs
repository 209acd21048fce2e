//! Error types shared by the editor and its configuration layer.

use std::path::PathBuf;

/// Message shown to the user when a chosen file is not an image.
pub const NOT_AN_IMAGE_MESSAGE: &str = "The selected file did not contain an image!";

/// Errors raised by editor transitions.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// The file name does not mention a supported image extension.
    #[error("{}", NOT_AN_IMAGE_MESSAGE)]
    UnsupportedFormat(PathBuf),

    /// The save target does not name a format the editor can write.
    #[error("Cannot save {}: the name must contain .jpg, .png or .gif", .0.display())]
    UnsupportedSaveFormat(PathBuf),

    /// Reading or decoding a nominally supported file failed.
    #[error("Failed to load {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing the current buffer failed.
    #[error("Failed to save {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The operation needs a loaded image.
    #[error("No image is loaded")]
    NoImage,
}

/// Errors raised while reading the settings file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file. {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file. {0}")]
    Parse(#[from] serde_json::Error),
}
