use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Theme};

use crate::app::Message;
use crate::theme::tertiary_color;

/// Scrolling activity log mirroring what the scan reports.
pub fn view(lines: &[String]) -> Element<'_, Message> {
    let entries = column(
        lines
            .iter()
            .map(|line| {
                text(line.clone())
                    .size(12)
                    .style(|theme: &Theme| text::Style {
                        color: Some(tertiary_color(theme)),
                    })
                    .into()
            })
            .collect::<Vec<_>>(),
    )
    .spacing(1);

    container(scrollable(entries).height(120).anchor_bottom())
        .padding([8, 12])
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
