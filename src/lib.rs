//! Media container probing and best-stream selection.
//!
//! Opens a media file, keeps its playable video, audio and subtitle streams
//! (dropping embedded cover art), records the demuxer's preferred stream of
//! each kind and estimates the playable duration. The result is an immutable
//! [`MediaFile`] for the transcoding pipeline to consume.

pub(crate) mod api;
pub mod config;
pub mod demuxer;
pub(crate) mod error;
pub mod ffmpeg_utils;
pub mod index;
pub mod logging;
pub(crate) mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use api::*;
pub use config::{LoggingConfig, ProbeConfig};
pub use demuxer::{Demuxer, NativeStream};
pub use error::{FfmpegError, ProbeError, Result};
pub use ffmpeg_utils::version_info as ffmpeg_version_info;
pub use types::{Kind, MediaFile, Stream};
