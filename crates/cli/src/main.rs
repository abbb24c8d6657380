use std::path::PathBuf;
use std::process;

use clap::Parser;

use audioscout_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use audioscout_core::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use audioscout_core::export::domain::report::Report;
use audioscout_core::export::domain::report_writer::ReportWriter;
use audioscout_core::export::infrastructure::docx_report_writer::DocxReportWriter;
use audioscout_core::pipeline::find_fragments_use_case::FindFragmentsUseCase;
use audioscout_core::search::domain::keyphrase_set::KeyphraseSet;
use audioscout_core::shared::constants::{
    DEFAULT_LANGUAGE, WHISPER_MODEL_NAME, WHISPER_MODEL_URL,
};
use audioscout_core::shared::model_resolver;

/// Search an audio recording for spoken keyphrases.
#[derive(Parser)]
#[command(name = "audioscout")]
struct Cli {
    /// Input audio file.
    input: PathBuf,

    /// Keyphrases to search for (comma-separated, up to 10).
    #[arg(long, short, required = true)]
    keyphrases: String,

    /// Language hint for transcription.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Write matched fragments to this .docx file.
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let keyphrases = KeyphraseSet::parse(&cli.keyphrases);
    if keyphrases.is_empty() {
        return Err("No keyphrases given".into());
    }
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }

    let model_path = model_resolver::resolve(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        Some(Box::new(|downloaded, total| {
            if total > 0 {
                eprint!(
                    "\rDownloading model\u{2026} {:.0}%",
                    downloaded as f64 / total as f64 * 100.0
                );
            }
        })),
        None,
    )?;

    let recognizer = WhisperRecognizer::new(&model_path, &cli.language)?;
    let use_case = FindFragmentsUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(recognizer),
        keyphrases.clone(),
        Some(Box::new(|done, total| {
            log::info!("scanned window {done}/{total}");
        })),
        Some(Box::new(|fragment| {
            println!("{}", fragment.display_line());
        })),
        Some(Box::new(|index, msg| {
            eprintln!("Window {index} skipped: {msg}");
        })),
        None,
    );

    let outcome = use_case.run(&cli.input)?;
    eprintln!(
        "{} fragments found in {} windows",
        outcome.fragments.len(),
        outcome.windows_scanned
    );

    if let Some(export_path) = cli.export {
        if outcome.fragments.is_empty() {
            eprintln!("Nothing to export");
        } else {
            let report = Report::new(&cli.input, &keyphrases, &outcome.fragments);
            DocxReportWriter.write(&report, &export_path)?;
            eprintln!("Report written to {}", export_path.display());
        }
    }

    Ok(())
}
