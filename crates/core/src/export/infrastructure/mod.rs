pub mod docx_report_writer;
