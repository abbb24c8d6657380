use iced::widget::{button, column, progress_bar, row, text, text_input, Space};
use iced::{Element, Length};

use audioscout_core::shared::timecode::format_timecode;

use crate::app::{App, Message, SearchState};
use crate::widgets::{file_row, log_panel, result_list};

pub fn view(app: &App) -> Element<'_, Message> {
    let idle = !app.searching();

    let mut col = column![]
        .spacing(0)
        .push(status_line(app))
        .push(Space::new().height(4))
        .push(
            text(format!("Elapsed: {}", format_timecode(app.elapsed_secs as f64))).size(14),
        )
        .push(Space::new().height(12))
        .push(file_row::view("Audio file", app.audio_path.as_deref()))
        .push(Space::new().height(12))
        .push(
            text_input(
                "Up to 10 keyphrases, comma-separated",
                &app.keyphrase_input,
            )
            .on_input(Message::KeyphraseInputChanged)
            .padding([10, 12])
            .size(14),
        )
        .push(Space::new().height(16))
        .push(action_row(app, idle));

    if let SearchState::Downloading(downloaded, total) = app.search {
        let status = if total > 0 {
            let pct = downloaded as f64 / total as f64 * 100.0;
            format!("Downloading model \u{2014} {pct:.0}%")
        } else {
            format!("Downloading model\u{2026} {downloaded} bytes")
        };
        col = col
            .push(Space::new().height(12))
            .push(text(status).size(13));
    }
    if let SearchState::Scanning(done, total) = app.search {
        let pct = if total > 0 {
            done as f32 / total as f32 * 100.0
        } else {
            0.0
        };
        col = col
            .push(Space::new().height(12))
            .push(progress_bar(0.0..=100.0, pct))
            .push(
                text(format!("Transcribing window {done} of {total}\u{2026}")).size(13),
            );
    }

    col = col
        .push(Space::new().height(16))
        .push(result_list::view(&app.fragments))
        .push(Space::new().height(12))
        .push(log_panel::view(&app.log_lines));

    col.into()
}

fn status_line(app: &App) -> Element<'_, Message> {
    let status = match app.search {
        SearchState::Preparing => "Preparing search\u{2026}".to_string(),
        SearchState::Downloading(..) => "Fetching the transcription model\u{2026}".to_string(),
        SearchState::Scanning(..) => "Searching for keyphrases\u{2026}".to_string(),
        SearchState::Idle => match (&app.audio_path, app.fragments.len()) {
            (None, _) => "Waiting for an audio file".to_string(),
            (Some(_), 0) => "Ready to search".to_string(),
            (Some(_), n) => format!("{n} fragments found"),
        },
    };
    text(status).size(15).into()
}

fn action_row(app: &App, idle: bool) -> Element<'_, Message> {
    let mut actions = row![]
        .spacing(10)
        .push(
            button(text("Search").size(14))
                .on_press_maybe(idle.then_some(Message::RunSearch))
                .padding([10, 20]),
        )
        .push(
            button(text("Stop").size(14))
                .on_press_maybe((!idle).then_some(Message::StopSearch))
                .padding([10, 20])
                .style(button::danger),
        )
        .push(
            button(text("Export to Word").size(14))
                .on_press_maybe(idle.then_some(Message::Export))
                .padding([10, 20])
                .style(button::secondary),
        )
        .push(
            button(text("Clear").size(14))
                .on_press_maybe(idle.then_some(Message::ClearAll))
                .padding([10, 20])
                .style(button::secondary),
        );

    if app.last_export.is_some() {
        actions = actions.push(
            button(text("Open report").size(14))
                .on_press(Message::OpenLastExport)
                .padding([10, 20])
                .style(button::text),
        );
    }

    actions.width(Length::Fill).into()
}
