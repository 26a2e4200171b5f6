//! FFmpeg context wrappers for input handling

use std::path::{Path, PathBuf};

use ffmpeg_next as ffmpeg;
use ffmpeg_next::format::input;
use ffmpeg_next::format::stream::Disposition;

use super::helpers::{codec_description, codec_params_bit_rate};
use crate::demuxer::{Demuxer, NativeStream};
use crate::error::{FfmpegError, ProbeError, Result};

/// Wrapper for FFmpeg input context.
///
/// Opening runs stream-info discovery; the underlying format context is
/// closed when the wrapper is dropped, on every exit path.
pub struct InputContext {
    inner: ffmpeg::format::context::Input,
    source_path: PathBuf,
}

impl InputContext {
    /// Open a media file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner = input(&path).map_err(|e| {
            ProbeError::open(
                path,
                FfmpegError::OpenInput(format!("Failed to open {:?}: {}", path, e)),
            )
        })?;

        tracing::debug!("Opened input file: {:?}", path);

        Ok(Self {
            inner,
            source_path: path.to_path_buf(),
        })
    }
}

impl Demuxer for InputContext {
    fn path(&self) -> &Path {
        &self.source_path
    }

    fn duration_secs(&self) -> Option<f64> {
        // AV_NOPTS_VALUE (i64::MIN) when the container has no duration
        let duration = self.inner.duration();
        if duration > 0 {
            Some(duration as f64 / ffmpeg::ffi::AV_TIME_BASE as f64)
        } else {
            None
        }
    }

    fn streams(&self) -> Vec<NativeStream> {
        self.inner
            .streams()
            .map(|stream| {
                let params = stream.parameters();
                NativeStream {
                    index: stream.index(),
                    medium: params.medium(),
                    bit_rate: codec_params_bit_rate(&params),
                    codec_description: codec_description(params.id()),
                    attached_pic: stream.disposition().contains(Disposition::ATTACHED_PIC),
                    tags: stream
                        .metadata()
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                }
            })
            .collect()
    }

    fn best_stream(&self, medium: ffmpeg::media::Type) -> Option<usize> {
        self.inner.streams().best(medium).map(|s| s.index())
    }
}
