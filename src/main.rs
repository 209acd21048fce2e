use iced::widget::image::Handle;
use iced::widget::row;
use iced::{Element, Size, Task, Theme};

use snapshop::config::Config;
use snapshop::state::Editor;
use snapshop::ui::dialogs::NativeDialogs;
use snapshop::ui::{sidebar, viewer, Message};

/// Main application state
struct SnapShop {
    /// The editing session (owns the image buffer)
    editor: Editor,
    /// File choosers and error boxes
    dialogs: NativeDialogs,
    /// Display copy of the buffer, rebuilt after each transition
    preview: Option<Handle>,
}

impl SnapShop {
    /// Create the application with no image loaded
    fn new(config: Config) -> (Self, Task<Message>) {
        log::info!(
            "🎨 SnapShop started, file chooser opens in {}",
            config.start_directory.display()
        );

        (
            SnapShop {
                editor: Editor::new(&config),
                dialogs: NativeDialogs,
                preview: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Trigger(trigger) => {
                if self.editor.dispatch(trigger, &self.dialogs) && trigger.changes_pixels() {
                    self.preview = self.editor.image().map(viewer::handle_for);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        row![
            sidebar::view(&self.editor),
            viewer::view(self.preview.as_ref(), viewer::status_line(&self.editor)),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("SnapShop", SnapShop::update, SnapShop::view)
        .theme(SnapShop::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || SnapShop::new(config))
}
