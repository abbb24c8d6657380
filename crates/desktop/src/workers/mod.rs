pub mod playback;
pub mod search_worker;
