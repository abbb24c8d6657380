use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::timecode::format_timecode;

/// A kept match: the padded audio excerpt around a window whose transcript
/// contained a keyphrase, plus the transcript itself.
#[derive(Clone, Debug)]
pub struct Fragment {
    /// Start of the padded excerpt within the recording, in seconds.
    pub start: f64,
    /// End of the padded excerpt, in seconds.
    pub end: f64,
    /// Start of the matching window (pre-padding); this is what the
    /// timestamp label shows.
    pub window_start: f64,
    pub transcript: String,
    pub audio: AudioSegment,
}

impl Fragment {
    /// `MM:SS` label of the matching window's start.
    pub fn timecode_label(&self) -> String {
        format_timecode(self.window_start)
    }

    /// Result-list line: timestamp label plus transcript.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.timecode_label(), self.transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(window_start: f64, transcript: &str) -> Fragment {
        Fragment {
            start: (window_start - 1.5).max(0.0),
            end: window_start + 21.5,
            window_start,
            transcript: transcript.to_string(),
            audio: AudioSegment::new(vec![0.0; 160], 16000, 1),
        }
    }

    #[test]
    fn test_timecode_label_uses_window_start() {
        assert_eq!(fragment(75.0, "x").timecode_label(), "01:15");
    }

    #[test]
    fn test_display_line_joins_label_and_transcript() {
        assert_eq!(
            fragment(30.0, "hola mundo").display_line(),
            "00:30 - hola mundo"
        );
    }
}
