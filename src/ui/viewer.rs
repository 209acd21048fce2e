//! Image panel
//!
//! The shell should only borrow the editor's buffer for rendering, but iced
//! uploads pixels from an owned `Handle`, so the shell does hold a separate
//! RGBA copy. That copy is display-only: it is rebuilt from the buffer after
//! every transition that changes pixels (open, filter, close), is never
//! edited, and never flows back into the editor.

use iced::widget::image::{Handle, Image};
use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::raster::PixelImage;
use crate::state::Editor;
use super::Message;

/// Display handle for the current buffer
pub fn handle_for(image: &PixelImage) -> Handle {
    let (width, height) = image.dimensions();
    Handle::from_rgba(width, height, image.to_rgba_bytes())
}

/// One-line summary of what is open
pub fn status_line(editor: &Editor) -> String {
    match editor.loaded() {
        Some(loaded) => {
            let (width, height) = loaded.pixels.dimensions();
            match &loaded.saved_to {
                Some(saved) => format!(
                    "{} ({}x{}), saved to {}",
                    loaded.file_name(),
                    width,
                    height,
                    saved.display()
                ),
                None => format!("{} ({}x{})", loaded.file_name(), width, height),
            }
        }
        None => "No image. Use Open... to load a .jpg, .png or .gif file.".to_string(),
    }
}

pub fn view<'a>(preview: Option<&Handle>, status: String) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(handle) => Image::new(handle.clone()).into(),
        None => text("").into(),
    };

    let panel = container(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    column![panel, text(status).size(14)]
        .spacing(6)
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
