//! 3x3 weighted-kernel filters: edge detect, edge highlight, sharpen, soften.
//!
//! Each output channel is the weighted sum of the 3x3 neighbourhood read
//! from an untouched copy of the image, divided by the kernel total when
//! that total is non-zero, then clamped to 0..=255. The outermost rows and
//! columns have no full neighbourhood and are left as they were.

use super::Filter;
use crate::raster::PixelImage;

/// A convolution filter over a fixed 3x3 integer kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedFilter {
    name: &'static str,
    weights: [[i32; 3]; 3],
}

pub const EDGE_DETECT: WeightedFilter = WeightedFilter::new(
    "Edge Detect",
    [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]],
);

pub const EDGE_HIGHLIGHT: WeightedFilter = WeightedFilter::new(
    "Edge Highlight",
    [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]],
);

pub const SHARPEN: WeightedFilter = WeightedFilter::new(
    "Sharpen",
    [[-1, -2, -1], [-2, 28, -2], [-1, -2, -1]],
);

pub const SOFTEN: WeightedFilter = WeightedFilter::new(
    "Soften",
    [[1, 1, 1], [1, 1, 1], [1, 1, 1]],
);

impl WeightedFilter {
    pub const fn new(name: &'static str, weights: [[i32; 3]; 3]) -> Self {
        Self { name, weights }
    }

    /// Sum of all kernel weights
    pub fn total(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }

    fn convolve(&self, source: &PixelImage, x: u32, y: u32) -> [u8; 3] {
        let mut sums = [0i32; 3];

        for (ky, row) in self.weights.iter().enumerate() {
            for (kx, &weight) in row.iter().enumerate() {
                let px = source.get(x + kx as u32 - 1, y + ky as u32 - 1);
                for (sum, channel) in sums.iter_mut().zip(px) {
                    *sum += weight * channel as i32;
                }
            }
        }

        let total = self.total();
        sums.map(|sum| {
            let value = if total != 0 { sum / total } else { sum };
            value.clamp(0, 255) as u8
        })
    }
}

impl Filter for WeightedFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, image: &mut PixelImage) {
        let (width, height) = image.dimensions();
        if width < 3 || height < 3 {
            return;
        }

        let source = image.clone();
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                image.set(x, y, self.convolve(&source, x, y));
            }
        }
    }
}
