use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use audioscout_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use audioscout_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use audioscout_core::pipeline::find_fragments_use_case::FindFragmentsUseCase;
use audioscout_core::search::domain::fragment::Fragment;
use audioscout_core::search::domain::keyphrase_set::KeyphraseSet;
use audioscout_core::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use audioscout_core::shared::model_resolver;

/// Messages sent from the search worker thread to the UI.
#[derive(Debug)]
pub enum WorkerMessage {
    DownloadProgress(u64, u64),
    WindowScanned(usize, usize),
    FragmentFound(Box<Fragment>),
    WindowFailed(usize, String),
    Complete(usize),
    Cancelled(usize),
    Error(String),
}

/// Parameters for a scan job.
pub struct SearchParams {
    pub input_path: PathBuf,
    pub keyphrases: KeyphraseSet,
    pub language: String,
}

/// Spawn a background scan. Returns the channel receiver and the
/// cancellation token, polled per downloaded chunk while the model is
/// fetched and once per window while scanning.
pub fn spawn(params: SearchParams) -> (Receiver<WorkerMessage>, Arc<AtomicBool>) {
    let (tx, rx) = crossbeam_channel::unbounded::<WorkerMessage>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_clone = cancelled.clone();

    thread::spawn(move || {
        if let Err(e) = run_scan(&tx, &cancelled_clone, params) {
            if cancelled_clone.load(Ordering::Relaxed) {
                let _ = tx.send(WorkerMessage::Cancelled(0));
            } else {
                let _ = tx.send(WorkerMessage::Error(e.to_string()));
            }
        }
    });

    (rx, cancelled)
}

fn run_scan(
    tx: &Sender<WorkerMessage>,
    cancelled: &Arc<AtomicBool>,
    params: SearchParams,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the model first; on a cold cache this downloads it. The
    // cancellation token aborts the download between chunks, so Stop is
    // responsive even during the multi-hundred-MB first fetch.
    let tx_dl = tx.clone();
    let model_path = model_resolver::resolve(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        Some(Box::new(move |downloaded, total| {
            let _ = tx_dl.send(WorkerMessage::DownloadProgress(downloaded, total));
        })),
        Some(cancelled.clone()),
    )?;

    if cancelled.load(Ordering::Relaxed) {
        return Err("Cancelled".into());
    }

    let recognizer = WhisperRecognizer::new(&model_path, &params.language)?;

    let tx_progress = tx.clone();
    let tx_fragment = tx.clone();
    let tx_error = tx.clone();
    let use_case = FindFragmentsUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(recognizer),
        params.keyphrases,
        Some(Box::new(move |done, total| {
            let _ = tx_progress.send(WorkerMessage::WindowScanned(done, total));
        })),
        Some(Box::new(move |fragment| {
            let _ = tx_fragment.send(WorkerMessage::FragmentFound(Box::new(fragment.clone())));
        })),
        Some(Box::new(move |index, msg| {
            let _ = tx_error.send(WorkerMessage::WindowFailed(index, msg.to_string()));
        })),
        Some(cancelled.clone()),
    );

    let outcome = use_case.run(&params.input_path)?;
    if outcome.cancelled {
        let _ = tx.send(WorkerMessage::Cancelled(outcome.fragments.len()));
    } else {
        let _ = tx.send(WorkerMessage::Complete(outcome.fragments.len()));
    }
    Ok(())
}
