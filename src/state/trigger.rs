//! Trigger identities and which of them each editor state allows.

use crate::filters::FilterKind;

/// Whether an image is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    NoImage,
    ImageLoaded,
}

/// A user-actuatable control, bound to exactly one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// "Open..."
    Open,
    /// "Save As..."
    Save,
    /// "Close Image"
    Close,
    /// One of the filter buttons
    ApplyFilter(FilterKind),
}

impl Trigger {
    /// Whether the trigger is offered in `state`.
    ///
    /// Open is always available; everything else needs an image.
    pub fn is_enabled_in(self, state: UiState) -> bool {
        match self {
            Trigger::Open => true,
            Trigger::Save | Trigger::Close | Trigger::ApplyFilter(_) => {
                state == UiState::ImageLoaded
            }
        }
    }

    /// Whether a successful run of this trigger can alter the displayed pixels.
    ///
    /// Saving only encodes the buffer, so the preview stays valid.
    pub fn changes_pixels(self) -> bool {
        !matches!(self, Trigger::Save)
    }

    /// Every trigger the shell shows, filters first in catalog order
    pub fn all() -> impl Iterator<Item = Trigger> {
        FilterKind::ALL
            .into_iter()
            .map(Trigger::ApplyFilter)
            .chain([Trigger::Open, Trigger::Save, Trigger::Close])
    }

    pub fn label(self) -> &'static str {
        match self {
            Trigger::Open => "Open...",
            Trigger::Save => "Save As...",
            Trigger::Close => "Close Image",
            Trigger::ApplyFilter(kind) => kind.label(),
        }
    }
}
