//! SnapShop: open an image, run one-click pixel filters over it, save it.
//!
//! - `raster` holds the pixel buffer and file format detection
//! - `filters` holds the seven in-place filters and their catalog
//! - `state` holds the editor state machine that gates every operation
//! - `ui` holds the iced presentation shell

pub mod config;
pub mod error;
pub mod filters;
pub mod raster;
pub mod state;
pub mod ui;
