use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};

use crate::export::domain::report::{Report, REPORT_TITLE};
use crate::export::domain::report_writer::{ExportError, ReportWriter};

/// Renders a report as a Word document using docx-rs: a title heading, the
/// source file and keyphrase lines, then one subheading plus paragraph per
/// fragment.
pub struct DocxReportWriter;

impl ReportWriter for DocxReportWriter {
    fn write(&self, report: &Report, path: &Path) -> Result<(), ExportError> {
        if report.is_empty() {
            return Err(ExportError::NoFragments);
        }

        let mut docx = Docx::new()
            .add_style(
                Style::new("Heading1", StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            )
            .add_style(
                Style::new("Heading2", StyleType::Paragraph)
                    .name("Heading 2")
                    .size(26)
                    .bold(),
            )
            .add_paragraph(
                Paragraph::new()
                    .style("Heading1")
                    .add_run(Run::new().add_text(REPORT_TITLE)),
            )
            .add_paragraph(Paragraph::new().add_run(
                Run::new().add_text(format!("Archivo de origen: {}", report.source_name)),
            ))
            .add_paragraph(Paragraph::new().add_run(
                Run::new().add_text(format!("Frases clave usadas: {}", report.keyphrases)),
            ))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(" ")));

        for entry in &report.entries {
            docx = docx
                .add_paragraph(
                    Paragraph::new().style("Heading2").add_run(
                        Run::new()
                            .add_text(format!("Fragmento {} \u{2013} {}", entry.number, entry.label)),
                    ),
                )
                .add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text(entry.transcript.as_str())),
                );
        }

        let file = File::create(path).map_err(|e| ExportError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;
        docx.build()
            .pack(file)
            .map_err(|e| ExportError::Document(e.to_string()))?;

        log::info!("exported {} fragments to {}", report.entries.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::domain::report::ReportEntry;
    use tempfile::TempDir;

    fn sample_report() -> Report {
        Report {
            source_name: "entrevista.m4a".to_string(),
            keyphrases: "hola, contrato".to_string(),
            entries: vec![
                ReportEntry {
                    number: 1,
                    label: "00:15".to_string(),
                    transcript: "dijo hola al entrar".to_string(),
                },
                ReportEntry {
                    number: 2,
                    label: "02:30".to_string(),
                    transcript: "firmaron el contrato".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_write_produces_nonempty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fragmentos.docx");

        DocxReportWriter.write(&sample_report(), &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fragmentos.docx");

        let report = Report {
            source_name: "a.wav".to_string(),
            keyphrases: "x".to_string(),
            entries: Vec::new(),
        };
        let result = DocxReportWriter.write(&report, &path);

        assert!(matches!(result, Err(ExportError::NoFragments)));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_to_unwritable_path_is_create_error() {
        let report = sample_report();
        let result = DocxReportWriter.write(&report, Path::new("/nonexistent/dir/out.docx"));
        assert!(matches!(result, Err(ExportError::Create { .. })));
    }
}
