//! Image format detection from file names.
//!
//! The check is intentionally loose: the last whitespace-delimited token of
//! the path only has to *contain* one of the known extensions, so
//! `photo.pngx` passes while `photo.png backup` does not.

use std::path::Path;

/// Image codec families the editor can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFamily {
    Jpeg,
    Png,
    Gif,
}

impl ImageFamily {
    /// All families with the extension fragment that selects them.
    const EXTENSIONS: [(&'static str, ImageFamily); 3] = [
        (".jpg", ImageFamily::Jpeg),
        (".png", ImageFamily::Png),
        (".gif", ImageFamily::Gif),
    ];

    /// Detect the family named by a path.
    ///
    /// Returns `None` when no known extension appears in the last
    /// whitespace-delimited token. If several appear, the right-most one wins.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy().to_lowercase();
        let token = name.split_whitespace().last()?;

        Self::EXTENSIONS
            .iter()
            .filter_map(|(ext, family)| token.rfind(ext).map(|pos| (pos, *family)))
            .max_by_key(|(pos, _)| *pos)
            .map(|(_, family)| family)
    }

    /// Extension fragment used for this family.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFamily::Jpeg => ".jpg",
            ImageFamily::Png => ".png",
            ImageFamily::Gif => ".gif",
        }
    }
}

/// Whether a chosen file looks like an image the editor can open.
pub fn has_image_extension(path: &Path) -> bool {
    ImageFamily::detect(path).is_some()
}
