use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length, Theme};

use audioscout_core::search::domain::fragment::Fragment;

use crate::app::Message;
use crate::theme::tertiary_color;

/// The matched-fragment list. Clicking a row plays its audio.
pub fn view(fragments: &[Fragment]) -> Element<'_, Message> {
    if fragments.is_empty() {
        return container(
            text("No results yet. Matches appear here as they are found; click one to play it.")
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(tertiary_color(theme)),
                }),
        )
        .padding([14, 16])
        .width(Length::Fill)
        .style(container::rounded_box)
        .into();
    }

    let rows = column(
        fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| {
                button(text(fragment.display_line()).size(13))
                    .on_press(Message::PlayFragment(index))
                    .padding([6, 10])
                    .width(Length::Fill)
                    .style(button::text)
                    .into()
            })
            .collect::<Vec<_>>(),
    )
    .spacing(2);

    container(scrollable(rows).height(200))
        .padding(6)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
