//! Stream indexing module
//!
//! This module turns an opened container into a [`MediaFile`](crate::MediaFile):
//! - Native type classification and cover-art filtering
//! - Stream descriptor building (bitrate, language, codec description)
//! - Best-stream selection per kind
//! - Duration estimation

pub mod classify;
pub mod duration;
pub mod scanner;
pub mod selector;

pub use classify::{classify, is_decorative};
pub use duration::estimate_duration;
pub use scanner::{build_media_file, scan_file, scan_file_with_config};
pub use selector::select_best_streams;
