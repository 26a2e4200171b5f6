use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ProbeError, Result};

/// Domain classification of an elementary stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Video,
    Audio,
    Subtitle,
}

impl Kind {
    /// Every kind, in display order
    pub const ALL: [Kind; 3] = [Kind::Video, Kind::Audio, Kind::Subtitle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Video => "video",
            Kind::Audio => "audio",
            Kind::Subtitle => "subtitle",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playable elementary stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    /// Native container stream index
    pub id: usize,
    pub kind: Kind,
    /// Bits per second, 0 if unknown
    pub bitrate: u64,
    pub language: Option<String>,
    /// Human-readable codec label, for display and logging only
    pub codec_description: String,
}

/// Immutable inventory of a probed media file.
///
/// Holds every playable stream in container order plus the demuxer's
/// preferred stream id for each kind that has one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaFile {
    path: PathBuf,
    duration: Option<u64>,
    streams: Vec<Stream>,
    best_streams: BTreeMap<Kind, usize>,
}

impl MediaFile {
    pub(crate) fn new(
        path: PathBuf,
        duration: Option<u64>,
        streams: Vec<Stream>,
        best_streams: BTreeMap<Kind, usize>,
    ) -> Self {
        Self {
            path,
            duration,
            streams,
            best_streams,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Estimated playable duration in whole seconds
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn best_streams(&self) -> &BTreeMap<Kind, usize> {
        &self.best_streams
    }

    /// All streams of the given kind, in container order
    pub fn streams_of(&self, kind: Kind) -> Vec<&Stream> {
        self.streams.iter().filter(|s| s.kind == kind).collect()
    }

    pub fn has_kind(&self, kind: Kind) -> bool {
        self.streams.iter().any(|s| s.kind == kind)
    }

    /// Look up a stream by its native index.
    ///
    /// A miss is a consistency error and is logged at error level.
    pub fn stream(&self, id: usize) -> Result<&Stream> {
        match self.streams.iter().find(|s| s.id == id) {
            Some(stream) => Ok(stream),
            None => {
                tracing::error!(
                    "Cannot find stream index {} in {:?}",
                    id,
                    self.path
                );
                Err(ProbeError::StreamNotFound(id))
            }
        }
    }

    /// Resolve the preferred stream of `kind`, if there is a usable one
    pub fn best_stream(&self, kind: Kind) -> Option<&Stream> {
        let id = *self.best_streams.get(&kind)?;
        self.stream(id).ok()
    }
}
