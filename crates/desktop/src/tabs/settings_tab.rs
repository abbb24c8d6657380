use iced::widget::{column, pick_list, text, text_input, Space};
use iced::Element;

use crate::app::Message;
use crate::settings::{Appearance, Settings};

pub fn view(settings: &Settings) -> Element<'_, Message> {
    column![
        text("Transcription").size(15),
        Space::new().height(8),
        text("Language hint (ISO code, e.g. es, en)").size(13),
        text_input("es", &settings.language)
            .on_input(Message::LanguageChanged)
            .padding([8, 10])
            .size(14)
            .width(120),
        Space::new().height(20),
        text("Appearance").size(15),
        Space::new().height(8),
        pick_list(
            Appearance::ALL,
            Some(settings.appearance),
            Message::AppearanceChanged,
        ),
    ]
    .spacing(2)
    .into()
}
