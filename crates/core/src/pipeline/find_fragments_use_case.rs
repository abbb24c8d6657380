use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::search::domain::fragment::Fragment;
use crate::search::domain::keyphrase_set::KeyphraseSet;
use crate::search::domain::scan_plan::plan_windows;
use crate::shared::constants::{FRAGMENT_PADDING_SECS, WHISPER_SAMPLE_RATE};

/// Result of a scan, whether it ran to completion or was cancelled.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Kept fragments in increasing start-time order.
    pub fragments: Vec<Fragment>,
    pub windows_scanned: usize,
    pub windows_total: usize,
    pub cancelled: bool,
}

/// Orchestrates the window scan: decode the file once, transcribe each
/// overlapping window, keep padded excerpts around keyphrase hits.
///
/// A failed window is reported and skipped; only decode failures abort the
/// scan. The cancellation token is polled once per window, so stopping takes
/// effect at the next window boundary.
pub struct FindFragmentsUseCase {
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
    keyphrases: KeyphraseSet,
    on_progress: Option<Box<dyn Fn(usize, usize) + Send>>,
    on_fragment: Option<Box<dyn Fn(&Fragment) + Send>>,
    on_window_error: Option<Box<dyn Fn(usize, &str) + Send>>,
    cancelled: Arc<AtomicBool>,
}

impl FindFragmentsUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        recognizer: Box<dyn SpeechRecognizer>,
        keyphrases: KeyphraseSet,
        on_progress: Option<Box<dyn Fn(usize, usize) + Send>>,
        on_fragment: Option<Box<dyn Fn(&Fragment) + Send>>,
        on_window_error: Option<Box<dyn Fn(usize, &str) + Send>>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            reader,
            recognizer,
            keyphrases,
            on_progress,
            on_fragment,
            on_window_error,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn run(&self, source_path: &Path) -> Result<ScanOutcome, Box<dyn std::error::Error>> {
        let audio = self
            .reader
            .read_audio(source_path, WHISPER_SAMPLE_RATE)?
            .ok_or("File has no audio track")?;

        let duration = audio.duration();
        let windows = plan_windows(duration);
        let total = windows.len();
        log::info!(
            "scanning {} windows over {duration:.1}s of audio",
            windows.len()
        );

        let mut fragments = Vec::new();
        let mut scanned = 0;

        for (index, window) in windows.iter().enumerate() {
            if self.cancelled.load(Ordering::Relaxed) {
                log::info!("scan cancelled after {scanned} of {total} windows");
                return Ok(ScanOutcome {
                    fragments,
                    windows_scanned: scanned,
                    windows_total: total,
                    cancelled: true,
                });
            }

            let slice = audio.slice_seconds(window.start, window.end);
            match self.recognizer.transcribe(&slice) {
                Ok(transcript) => {
                    if self.keyphrases.matches(&transcript) {
                        let start = (window.start - FRAGMENT_PADDING_SECS).max(0.0);
                        let end = (window.end + FRAGMENT_PADDING_SECS).min(duration);
                        let fragment = Fragment {
                            start,
                            end,
                            window_start: window.start,
                            transcript,
                            audio: audio.slice_seconds(start, end),
                        };
                        if let Some(ref cb) = self.on_fragment {
                            cb(&fragment);
                        }
                        fragments.push(fragment);
                    }
                }
                Err(e) => {
                    log::warn!("window {index} failed to transcribe: {e}");
                    if let Some(ref cb) = self.on_window_error {
                        cb(index, &e.to_string());
                    }
                }
            }

            scanned += 1;
            if let Some(ref cb) = self.on_progress {
                cb(scanned, total);
            }
        }

        Ok(ScanOutcome {
            fragments,
            windows_scanned: scanned,
            windows_total: total,
            cancelled: false,
        })
    }
}
