//! Shared data structures for the editor state.

use std::path::{Path, PathBuf};

use crate::raster::PixelImage;

/// The image currently open in the editor
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedImage {
    /// The editable buffer, owned exclusively by the editor
    pub pixels: PixelImage,
    /// File the buffer was decoded from
    pub source: PathBuf,
    /// Last file the buffer was written to (None until the first save)
    pub saved_to: Option<PathBuf>,
}

impl LoadedImage {
    pub fn new(pixels: PixelImage, source: PathBuf) -> Self {
        Self {
            pixels,
            source,
            saved_to: None,
        }
    }

    /// Short name for status display (e.g., "holiday.png")
    pub fn file_name(&self) -> String {
        display_name(&self.source)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
