//! Storage Adapter - 本地文件存储

mod file_storage;

pub use file_storage::{resolve_output_path, FileAudioStorage};
