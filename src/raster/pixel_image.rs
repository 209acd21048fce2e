//! In-memory pixel buffer
//!
//! The editor works on a plain 8-bit RGB grid. Files are decoded into it on
//! open and encoded from it on save; filters mutate it in place.

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, Frame, ImageEncoder, ImageReader, ImageResult, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

use super::format::ImageFamily;

/// An owned, mutable RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    pixels: RgbImage,
}

impl PixelImage {
    /// Wrap an existing RGB buffer
    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Decode an image file into an RGB buffer.
    ///
    /// The codec is sniffed from the file content first, so a PNG saved
    /// under an odd name (e.g. `photo.pngx`) still decodes. Alpha is dropped.
    pub fn load(path: &Path) -> ImageResult<Self> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;

        log::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(Self {
            pixels: decoded.to_rgb8(),
        })
    }

    /// Encode the buffer to `path` using the given codec family.
    ///
    /// `jpeg_quality` only applies to JPEG output. The whole file is encoded
    /// in memory first, so an encoder error leaves an existing `path` intact.
    pub fn save(&self, path: &Path, family: ImageFamily, jpeg_quality: u8) -> ImageResult<()> {
        let encoded = self.encode(family, jpeg_quality)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }

    /// Encode the buffer into a byte vector
    pub fn encode(&self, family: ImageFamily, jpeg_quality: u8) -> ImageResult<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        let (width, height) = self.pixels.dimensions();

        match family {
            ImageFamily::Jpeg => {
                JpegEncoder::new_with_quality(&mut out, jpeg_quality).write_image(
                    self.pixels.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
            }
            ImageFamily::Png => {
                PngEncoder::new(&mut out).write_image(
                    self.pixels.as_raw(),
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
            }
            ImageFamily::Gif => {
                // GIF frames are RGBA; the encoder writes the trailer on drop
                let rgba = DynamicImage::ImageRgb8(self.pixels.clone()).to_rgba8();
                let mut encoder = GifEncoder::new(&mut out);
                encoder.encode_frame(Frame::new(rgba))?;
            }
        }

        Ok(out.into_inner())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Color at (x, y). Panics if out of bounds, like `RgbImage`.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    /// Overwrite the color at (x, y)
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.pixels.put_pixel(x, y, Rgb(rgb));
    }

    /// Expand to tightly packed RGBA bytes for display
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2], u8::MAX])
            .collect()
    }
}
