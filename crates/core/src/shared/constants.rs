pub const WHISPER_MODEL_NAME: &str = "ggml-small.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-small.bin";

/// Whisper expects 16 kHz mono input.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

/// Default language hint passed to the recognizer.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Length of each transcription window, in seconds.
pub const WINDOW_SECS: f64 = 20.0;

/// Distance between window starts, in seconds. Smaller than the window
/// length, so consecutive windows overlap by 5 seconds.
pub const STRIDE_SECS: f64 = 15.0;

/// Seconds added to each side of a matched window before keeping it.
pub const FRAGMENT_PADDING_SECS: f64 = 1.5;

/// Upper bound on keyphrases accepted from the user.
pub const MAX_KEYPHRASES: usize = 10;

pub const AUDIO_EXTENSIONS: &[&str] = &["m4a", "wav", "wma", "mp3", "flac", "ogg", "aac"];
