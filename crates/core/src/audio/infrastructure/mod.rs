pub mod ffmpeg_audio_reader;
pub mod rodio_audio_player;
pub mod whisper_recognizer;
