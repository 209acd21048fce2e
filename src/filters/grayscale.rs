//! Grayscale conversion by channel average.

use super::Filter;
use crate::raster::PixelImage;

/// Replace every pixel with the mean of its three channels
#[derive(Debug, Clone, Copy, Default)]
pub struct Grayscale;

impl Filter for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn apply(&self, image: &mut PixelImage) {
        let (width, height) = image.dimensions();
        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = image.get(x, y);
                let gray = ((r as u16 + g as u16 + b as u16) / 3) as u8;
                image.set(x, y, [gray; 3]);
            }
        }
    }
}
