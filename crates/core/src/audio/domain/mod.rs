pub mod audio_player;
pub mod audio_reader;
pub mod audio_segment;
pub mod speech_recognizer;
