pub mod audio;
pub mod export;
pub mod pipeline;
pub mod search;
pub mod shared;
