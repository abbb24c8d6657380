pub mod file_row;
pub mod log_panel;
pub mod result_list;
