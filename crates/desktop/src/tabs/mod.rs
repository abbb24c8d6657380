pub mod search_tab;
pub mod settings_tab;
