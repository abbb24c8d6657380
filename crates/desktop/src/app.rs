use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use audioscout_core::export::domain::report::Report;
use audioscout_core::export::domain::report_writer::ReportWriter;
use audioscout_core::export::infrastructure::docx_report_writer::DocxReportWriter;
use audioscout_core::search::domain::fragment::Fragment;
use audioscout_core::search::domain::keyphrase_set::KeyphraseSet;
use audioscout_core::shared::constants::AUDIO_EXTENSIONS;

use crate::settings::{Appearance, Settings};
use crate::tabs;
use crate::theme;
use crate::workers::{playback, search_worker};

const DEFAULT_EXPORT_NAME: &str = "fragmentos_detectados.docx";

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Settings,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Search, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Settings => "Settings",
        }
    }
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Preparing,
    Downloading(u64, u64),
    Scanning(usize, usize),
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SelectAudio,
    AudioSelected(Option<PathBuf>),
    KeyphraseInputChanged(String),
    RunSearch,
    StopSearch,
    PollWorker,
    Tick,
    PlayFragment(usize),
    Export,
    ExportPathChosen(Option<PathBuf>),
    OpenLastExport,
    ClearAll,
    ClearConfirmed(bool),
    LanguageChanged(String),
    AppearanceChanged(Appearance),
    DialogDismissed,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub audio_path: Option<PathBuf>,
    pub keyphrase_input: String,
    pub fragments: Vec<Fragment>,
    pub search: SearchState,
    pub elapsed_secs: u64,
    pub log_lines: Vec<String>,
    pub last_export: Option<PathBuf>,
    started_at: Option<Instant>,
    worker_rx: Option<Receiver<search_worker::WorkerMessage>>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                active_tab: Tab::Search,
                settings: Settings::load(),
                audio_path: None,
                keyphrase_input: String::new(),
                fragments: Vec::new(),
                search: SearchState::Idle,
                elapsed_secs: 0,
                log_lines: Vec::new(),
                last_export: None,
                started_at: None,
                worker_rx: None,
                cancel_flag: None,
            },
            Task::none(),
        )
    }

    pub fn searching(&self) -> bool {
        self.worker_rx.is_some()
    }

    pub fn keyphrases(&self) -> KeyphraseSet {
        KeyphraseSet::parse(&self.keyphrase_input)
    }

    fn log(&mut self, line: impl Into<String>) {
        self.log_lines.push(line.into());
    }

    fn finish_search(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.elapsed_secs = started.elapsed().as_secs();
        }
        self.worker_rx = None;
        self.cancel_flag = None;
        self.search = SearchState::Idle;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::SelectAudio => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Select audio file")
                            .add_filter("Audio Files", AUDIO_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::AudioSelected,
                );
            }
            Message::AudioSelected(Some(path)) => {
                self.log(format!("Loaded file: {}", path.display()));
                self.audio_path = Some(path);
            }
            Message::AudioSelected(None) => {}
            Message::KeyphraseInputChanged(input) => {
                self.keyphrase_input = input;
            }
            Message::RunSearch => return self.start_search(),
            Message::StopSearch => {
                if let Some(ref flag) = self.cancel_flag {
                    flag.store(true, Ordering::Relaxed);
                    self.log("Stop requested; finishing the current window.");
                } else {
                    self.log("No search in progress.");
                }
            }
            Message::PollWorker => return self.drain_worker(),
            Message::Tick => {
                if let Some(started) = self.started_at {
                    self.elapsed_secs = started.elapsed().as_secs();
                }
            }
            Message::PlayFragment(index) => {
                if let Some(fragment) = self.fragments.get(index) {
                    self.log_lines
                        .push(format!("Playing fragment at {}", fragment.timecode_label()));
                    playback::spawn(fragment.audio.clone());
                }
            }
            Message::Export => return self.start_export(),
            Message::ExportPathChosen(Some(path)) => return self.write_export(path),
            Message::ExportPathChosen(None) => {}
            Message::OpenLastExport => {
                if let Some(ref path) = self.last_export {
                    let _ = open::that(path);
                }
            }
            Message::ClearAll => {
                return confirm_dialog(
                    "Clear everything",
                    "Discard all found fragments and the log?",
                    Message::ClearConfirmed,
                );
            }
            Message::ClearConfirmed(true) => {
                self.fragments.clear();
                self.log_lines.clear();
                self.last_export = None;
                self.elapsed_secs = 0;
                self.log("Everything cleared.");
            }
            Message::ClearConfirmed(false) => {}
            Message::LanguageChanged(language) => {
                self.settings.language = language;
                self.settings.save();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::DialogDismissed => {}
        }
        Task::none()
    }

    fn start_search(&mut self) -> Task<Message> {
        if self.searching() {
            return Task::none();
        }
        let Some(path) = self.audio_path.clone() else {
            return warning_dialog("No file", "Select an audio file first.");
        };
        let keyphrases = self.keyphrases();
        if keyphrases.is_empty() {
            return warning_dialog("No keyphrases", "Enter at least one keyphrase.");
        }

        self.fragments.clear();
        self.last_export = None;
        self.search = SearchState::Preparing;
        self.started_at = Some(Instant::now());
        self.elapsed_secs = 0;
        self.log(format!("Searching for: {keyphrases}"));

        let (rx, cancel) = search_worker::spawn(search_worker::SearchParams {
            input_path: path,
            keyphrases,
            language: self.settings.language.clone(),
        });
        self.worker_rx = Some(rx);
        self.cancel_flag = Some(cancel);
        Task::none()
    }

    fn drain_worker(&mut self) -> Task<Message> {
        use search_worker::WorkerMessage;

        let pending: Vec<WorkerMessage> = match self.worker_rx.as_ref() {
            Some(rx) => rx.try_iter().collect(),
            None => return Task::none(),
        };

        let mut tasks = Vec::new();
        for msg in pending {
            match msg {
                WorkerMessage::DownloadProgress(downloaded, total) => {
                    self.search = SearchState::Downloading(downloaded, total);
                }
                WorkerMessage::WindowScanned(done, total) => {
                    self.search = SearchState::Scanning(done, total);
                }
                WorkerMessage::FragmentFound(fragment) => {
                    self.log(format!("Match at {}", fragment.timecode_label()));
                    self.fragments.push(*fragment);
                }
                WorkerMessage::WindowFailed(index, error) => {
                    self.log(format!("Window {index} skipped: {error}"));
                }
                WorkerMessage::Complete(count) => {
                    self.finish_search();
                    if count > 0 {
                        self.log(format!("Found {count} matching fragments."));
                    } else {
                        self.log("No matches found in the audio.");
                    }
                }
                WorkerMessage::Cancelled(count) => {
                    self.finish_search();
                    self.log(format!(
                        "Search stopped; keeping the {count} fragments found so far."
                    ));
                }
                WorkerMessage::Error(error) => {
                    self.finish_search();
                    self.log(format!("Search failed: {error}"));
                    tasks.push(warning_dialog("Search failed", &error));
                }
            }
        }
        Task::batch(tasks)
    }

    fn start_export(&mut self) -> Task<Message> {
        if self.fragments.is_empty() {
            return info_dialog("Nothing to export", "There are no fragments to export.");
        }
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Save report as")
                    .add_filter("Word Document", &["docx"])
                    .set_file_name(DEFAULT_EXPORT_NAME)
                    .save_file()
                    .await
                    .map(|h| h.path().to_path_buf())
            },
            Message::ExportPathChosen,
        )
    }

    fn write_export(&mut self, path: PathBuf) -> Task<Message> {
        let Some(source) = self.audio_path.clone() else {
            return Task::none();
        };
        let report = Report::new(&source, &self.keyphrases(), &self.fragments);
        match DocxReportWriter.write(&report, &path) {
            Ok(()) => {
                self.log(format!("Results exported to {}", path.display()));
                let body = format!("Report saved as:\n{}", path.display());
                self.last_export = Some(path);
                info_dialog("Export complete", &body)
            }
            Err(e) => {
                self.log(format!("Export failed: {e}"));
                warning_dialog("Export failed", &e.to_string())
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        // Tab bar
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let btn = button(text(tab.label()).size(13))
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let content: Element<'_, Message> = match self.active_tab {
            Tab::Search => tabs::search_tab::view(self),
            Tab::Settings => tabs::settings_tab::view(&self.settings),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.searching() {
            Subscription::batch([
                iced::time::every(Duration::from_millis(100)).map(|_| Message::PollWorker),
                iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick),
            ])
        } else {
            Subscription::none()
        }
    }
}

// ---------------------------------------------------------------------------
// Dialog helpers
// ---------------------------------------------------------------------------

fn warning_dialog(title: &str, body: &str) -> Task<Message> {
    message_dialog(rfd::MessageLevel::Warning, title, body)
}

fn info_dialog(title: &str, body: &str) -> Task<Message> {
    message_dialog(rfd::MessageLevel::Info, title, body)
}

fn message_dialog(level: rfd::MessageLevel, title: &str, body: &str) -> Task<Message> {
    let title = title.to_owned();
    let body = body.to_owned();
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title)
                .set_description(body)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await;
        },
        |_| Message::DialogDismissed,
    )
}

fn confirm_dialog(
    title: &str,
    body: &str,
    on_answer: fn(bool) -> Message,
) -> Task<Message> {
    let title = title.to_owned();
    let body = body.to_owned();
    Task::perform(
        async move {
            let result = rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(title)
                .set_description(body)
                .set_buttons(rfd::MessageButtons::YesNo)
                .show()
                .await;
            matches!(result, rfd::MessageDialogResult::Yes)
        },
        on_answer,
    )
}
