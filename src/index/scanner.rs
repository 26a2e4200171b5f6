//! File scanner - builds the stream inventory of a media file
//!
//! Everything is derived from the container header and the stream info the
//! demuxer gathered while opening; no media data is decoded here.

use std::path::Path;

use crate::config::ProbeConfig;
use crate::demuxer::{Demuxer, NativeStream};
use crate::error::{ProbeError, Result};
use crate::ffmpeg_utils::{self, InputContext};
use crate::types::{Kind, MediaFile, Stream};

use super::classify::{classify, is_decorative};
use super::duration::estimate_duration;
use super::selector::select_best_streams;

/// Scan a media file with the default configuration
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<MediaFile> {
    scan_file_with_config(path, &ProbeConfig::default())
}

/// Scan a media file with a custom configuration.
///
/// The demuxer context lives only for the duration of this call.
pub fn scan_file_with_config<P: AsRef<Path>>(path: P, config: &ProbeConfig) -> Result<MediaFile> {
    let path = path.as_ref();

    ffmpeg_utils::init().map_err(|e| ProbeError::open(path, e))?;
    let context = InputContext::open(path)?;

    Ok(build_media_file(&context, config))
}

/// Build the inventory of an opened container
pub fn build_media_file<D: Demuxer + ?Sized>(demuxer: &D, config: &ProbeConfig) -> MediaFile {
    let mut streams = Vec::new();
    let mut encountered = Vec::new();

    for native in demuxer.streams() {
        let Some(kind) = classify(native.medium) else {
            tracing::debug!("Skipping stream {} (type={:?})", native.index, native.medium);
            continue;
        };

        if is_decorative(&native) {
            tracing::debug!("Skipping stream {} (attached picture)", native.index);
            continue;
        }

        encountered.push(native.medium);

        let stream = describe_stream(&native, kind, &config.language_key);
        tracing::debug!(
            "Stream idx {}, type = {}, bitrate = {}, codec desc = {}",
            stream.id,
            stream.kind,
            stream.bitrate,
            stream.codec_description
        );
        streams.push(stream);
    }

    let best_streams = select_best_streams(demuxer, &encountered, &streams);
    let duration = estimate_duration(demuxer.duration_secs());

    tracing::info!(
        "Probed file: {:?}, duration={:?}s, streams={}, best={:?}",
        demuxer.path(),
        duration,
        streams.len(),
        best_streams
    );

    MediaFile::new(demuxer.path().to_path_buf(), duration, streams, best_streams)
}

/// Build a stream descriptor from its native snapshot
fn describe_stream(native: &NativeStream, kind: Kind, language_key: &str) -> Stream {
    Stream {
        id: native.index,
        kind,
        bitrate: native.bit_rate.max(0) as u64,
        language: native
            .tag(language_key)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from),
        codec_description: native.codec_description.clone(),
    }
}
