//! Container/demuxer interface consumed by the probe.
//!
//! [`InputContext`](crate::ffmpeg_utils::InputContext) is the FFmpeg-backed
//! implementation; tests substitute a scripted one.

use std::collections::BTreeMap;
use std::path::Path;

use ffmpeg_next as ffmpeg;

/// Snapshot of one elementary stream as the container reports it
#[derive(Debug, Clone)]
pub struct NativeStream {
    /// Native container stream index
    pub index: usize,
    pub medium: ffmpeg::media::Type,
    /// Bit rate as reported by the library; may be 0 or negative when unknown
    pub bit_rate: i64,
    pub codec_description: String,
    /// Stream holds a single attached still image (embedded artwork)
    pub attached_pic: bool,
    pub tags: BTreeMap<String, String>,
}

impl NativeStream {
    /// Look up a per-stream metadata value by key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Format-layer reader over an opened media file
pub trait Demuxer {
    /// Location the demuxer was opened from
    fn path(&self) -> &Path;

    /// Container-level duration in seconds, `None` if not reported
    fn duration_secs(&self) -> Option<f64>;

    /// All elementary streams in container enumeration order
    fn streams(&self) -> Vec<NativeStream>;

    /// Native index of the library's preferred stream of `medium`
    fn best_stream(&self, medium: ffmpeg::media::Type) -> Option<usize>;
}
