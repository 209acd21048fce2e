//! Raster image handling
//!
//! This module handles:
//! - The in-memory RGB pixel buffer (pixel_image.rs)
//! - File name based format detection (format.rs)

pub mod format;
pub mod pixel_image;

pub use format::{has_image_extension, ImageFamily};
pub use pixel_image::PixelImage;
