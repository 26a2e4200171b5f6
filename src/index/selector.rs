//! Best-stream selection
//!
//! The demuxer's own ranking (default disposition, frame count, bitrate) is
//! used as-is. The only thing added here is a guarantee that the recorded id
//! is one of the playable streams: a pick that points at a stream the probe
//! dropped (e.g. cover art) is replaced by the first playable stream of that
//! kind.

use std::collections::BTreeMap;

use ffmpeg_next as ffmpeg;

use super::classify::classify;
use crate::demuxer::Demuxer;
use crate::types::{Kind, Stream};

/// Deduplicate encountered media types, keeping first-seen order
pub fn distinct_types(types: &[ffmpeg::media::Type]) -> Vec<ffmpeg::media::Type> {
    let mut distinct = Vec::with_capacity(types.len());
    for &medium in types {
        if !distinct.contains(&medium) {
            distinct.push(medium);
        }
    }
    distinct
}

/// Ask the demuxer for its preferred stream of each encountered type
pub fn select_best_streams<D: Demuxer + ?Sized>(
    demuxer: &D,
    encountered: &[ffmpeg::media::Type],
    streams: &[Stream],
) -> BTreeMap<Kind, usize> {
    let mut best = BTreeMap::new();

    for medium in distinct_types(encountered) {
        let Some(index) = demuxer.best_stream(medium) else {
            tracing::warn!("Cannot find best stream for type {:?}", medium);
            continue;
        };

        let Some(kind) = classify(medium) else {
            tracing::warn!(
                "Best stream {} has unclassifiable type {:?}, ignoring",
                index,
                medium
            );
            continue;
        };

        let id = if streams.iter().any(|s| s.id == index && s.kind == kind) {
            index
        } else if let Some(fallback) = streams.iter().find(|s| s.kind == kind) {
            tracing::warn!(
                "Best {} stream {} is not playable, using stream {} instead",
                kind,
                index,
                fallback.id
            );
            fallback.id
        } else {
            tracing::warn!("Best {} stream {} is not playable, none recorded", kind, index);
            continue;
        };

        best.insert(kind, id);
    }

    best
}
