//! Mirror filters. Both are pure pixel permutations.

use super::Filter;
use crate::raster::PixelImage;

/// Mirror left to right
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipHorizontal;

/// Mirror top to bottom
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipVertical;

impl Filter for FlipHorizontal {
    fn name(&self) -> &'static str {
        "Flip Horizontal"
    }

    fn apply(&self, image: &mut PixelImage) {
        let (width, height) = image.dimensions();
        for y in 0..height {
            for x in 0..width / 2 {
                let mirror = width - 1 - x;
                let left = image.get(x, y);
                image.set(x, y, image.get(mirror, y));
                image.set(mirror, y, left);
            }
        }
    }
}

impl Filter for FlipVertical {
    fn name(&self) -> &'static str {
        "Flip Vertical"
    }

    fn apply(&self, image: &mut PixelImage) {
        let (width, height) = image.dimensions();
        for y in 0..height / 2 {
            let mirror = height - 1 - y;
            for x in 0..width {
                let top = image.get(x, y);
                image.set(x, y, image.get(x, mirror));
                image.set(x, mirror, top);
            }
        }
    }
}
