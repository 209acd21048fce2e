//! Interactions the presentation shell provides to the editor.
//!
//! These calls block until the user answers. The native implementation
//! lives in `ui::dialogs`; tests script their own.

use std::path::{Path, PathBuf};

pub trait Prompts {
    /// Ask for a file to open, starting in `directory`. `None` if cancelled.
    fn request_open_path(&self, directory: &Path) -> Option<PathBuf>;

    /// Ask where to save, starting in `directory`. `None` if cancelled.
    fn request_save_path(&self, directory: &Path) -> Option<PathBuf>;

    /// Show a non-fatal error to the user
    fn report_error(&self, message: &str);
}
