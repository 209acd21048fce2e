//! Native dialogs backing the editor's prompts.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

use crate::state::Prompts;

/// Prompts shown with the platform's own file choosers and message boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Prompts for NativeDialogs {
    fn request_open_path(&self, directory: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Open...")
            .set_directory(directory)
            .pick_file()
    }

    fn request_save_path(&self, directory: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save As...")
            .set_directory(directory)
            .save_file()
    }

    fn report_error(&self, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error!")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
