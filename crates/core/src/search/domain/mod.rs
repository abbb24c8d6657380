pub mod fragment;
pub mod keyphrase_set;
pub mod scan_plan;
