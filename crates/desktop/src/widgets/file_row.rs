use std::path::Path;

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Theme};

use crate::app::Message;
use crate::theme::tertiary_color;

/// Labelled row showing the selected file name with a browse button.
pub fn view<'a>(label: &str, path: Option<&Path>) -> Element<'a, Message> {
    let display_text: Element<'a, Message> = if let Some(name) = path.and_then(|p| p.file_name()) {
        text(name.to_string_lossy().to_string()).size(15).into()
    } else {
        text("No file selected")
            .size(15)
            .style(|theme: &Theme| text::Style {
                color: Some(tertiary_color(theme)),
            })
            .into()
    };

    let btn = button(text("Browse").size(13))
        .padding([6, 14])
        .on_press(Message::SelectAudio)
        .style(button::secondary);

    let label_text = text(label.to_uppercase())
        .size(11)
        .style(|theme: &Theme| text::Style {
            color: Some(tertiary_color(theme)),
        });

    let content = row![column![label_text, display_text].width(Length::Fill), btn]
        .spacing(8)
        .align_y(iced::Alignment::Center);

    container(content)
        .padding([14, 16])
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}
