use std::path::Path;

use crate::search::domain::fragment::Fragment;
use crate::search::domain::keyphrase_set::KeyphraseSet;

pub const REPORT_TITLE: &str = "Fragmentos Detectados";

/// One exported match, numbered in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    /// 1-based position, matching the on-screen result list.
    pub number: usize,
    pub label: String,
    pub transcript: String,
}

/// The document content for an export: source file, keyphrases used and the
/// matched fragments in the same order as the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub source_name: String,
    pub keyphrases: String,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(source_path: &Path, keyphrases: &KeyphraseSet, fragments: &[Fragment]) -> Self {
        let entries = fragments
            .iter()
            .enumerate()
            .map(|(i, f)| ReportEntry {
                number: i + 1,
                label: f.timecode_label(),
                transcript: f.transcript.clone(),
            })
            .collect();
        Self {
            source_name: source_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            keyphrases: keyphrases.to_string(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;

    fn fragment(window_start: f64, transcript: &str) -> Fragment {
        Fragment {
            start: window_start,
            end: window_start + 20.0,
            window_start,
            transcript: transcript.to_string(),
            audio: AudioSegment::new(Vec::new(), 16000, 1),
        }
    }

    #[test]
    fn test_entries_numbered_in_display_order() {
        let fragments = vec![fragment(15.0, "uno"), fragment(75.0, "dos")];
        let report = Report::new(
            Path::new("/tmp/entrevista.m4a"),
            &KeyphraseSet::parse("uno, dos"),
            &fragments,
        );

        assert_eq!(report.source_name, "entrevista.m4a");
        assert_eq!(report.keyphrases, "uno, dos");
        assert_eq!(
            report.entries,
            vec![
                ReportEntry {
                    number: 1,
                    label: "00:15".to_string(),
                    transcript: "uno".to_string(),
                },
                ReportEntry {
                    number: 2,
                    label: "01:15".to_string(),
                    transcript: "dos".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_fragment_list_makes_empty_report() {
        let report = Report::new(Path::new("a.wav"), &KeyphraseSet::parse("x"), &[]);
        assert!(report.is_empty());
    }
}
