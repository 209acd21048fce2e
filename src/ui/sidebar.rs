//! Button column: filters at the top, file actions at the bottom.

use iced::widget::{button, column, text, vertical_space, Column};
use iced::{Element, Length};

use crate::filters;
use crate::state::{Editor, Trigger};
use super::Message;

/// Sidebar width in logical pixels
const SIDEBAR_WIDTH: f32 = 160.0;

/// Build the sidebar for the editor's current state
pub fn view(editor: &Editor) -> Element<'_, Message> {
    let filter_buttons = Column::with_children(
        filters::catalog()
            .map(|(label, kind)| trigger_button(editor, label, Trigger::ApplyFilter(kind))),
    )
    .spacing(4);

    let files = column![
        trigger_button(editor, Trigger::Open.label(), Trigger::Open),
        trigger_button(editor, Trigger::Save.label(), Trigger::Save),
        trigger_button(editor, Trigger::Close.label(), Trigger::Close),
    ]
    .spacing(4);

    column![filter_buttons, vertical_space(), files]
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(10)
        .into()
}

/// A button is disabled simply by not giving it a message
fn trigger_button<'a>(editor: &Editor, label: &'static str, trigger: Trigger) -> Element<'a, Message> {
    button(text(label))
        .width(Length::Fill)
        .on_press_maybe(
            editor
                .is_enabled(trigger)
                .then_some(Message::Trigger(trigger)),
        )
        .into()
}
