//! Pixel filters
//!
//! Every filter is parameterless and mutates a [`PixelImage`] in place.
//! The fixed, ordered catalog of filters offered to the user lives here as
//! [`FilterKind::ALL`].

pub mod flip;
pub mod grayscale;
pub mod kernel;

use crate::raster::PixelImage;

pub use flip::{FlipHorizontal, FlipVertical};
pub use grayscale::Grayscale;
pub use kernel::WeightedFilter;

/// An in-place pixel transformation
pub trait Filter {
    /// Display name shown on the filter's button
    fn name(&self) -> &'static str;

    /// Transform the image buffer in place
    fn apply(&self, image: &mut PixelImage);
}

/// The closed set of filters the editor offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    EdgeDetect,
    EdgeHighlight,
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Sharpen,
    Soften,
}

impl FilterKind {
    /// Catalog order, top to bottom in the sidebar
    pub const ALL: [FilterKind; 7] = [
        FilterKind::EdgeDetect,
        FilterKind::EdgeHighlight,
        FilterKind::FlipHorizontal,
        FilterKind::FlipVertical,
        FilterKind::Grayscale,
        FilterKind::Sharpen,
        FilterKind::Soften,
    ];

    /// The filter implementation behind this variant
    pub fn filter(self) -> &'static dyn Filter {
        match self {
            FilterKind::EdgeDetect => &kernel::EDGE_DETECT,
            FilterKind::EdgeHighlight => &kernel::EDGE_HIGHLIGHT,
            FilterKind::FlipHorizontal => &FlipHorizontal,
            FilterKind::FlipVertical => &FlipVertical,
            FilterKind::Grayscale => &Grayscale,
            FilterKind::Sharpen => &kernel::SHARPEN,
            FilterKind::Soften => &kernel::SOFTEN,
        }
    }

    pub fn label(self) -> &'static str {
        self.filter().name()
    }

    pub fn apply(self, image: &mut PixelImage) {
        self.filter().apply(image);
    }
}

/// Ordered (label, filter) pairs for building the filter buttons
pub fn catalog() -> impl Iterator<Item = (&'static str, FilterKind)> {
    FilterKind::ALL.into_iter().map(|kind| (kind.label(), kind))
}
