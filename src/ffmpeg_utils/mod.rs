//! FFmpeg module - provides wrappers and utilities for FFmpeg library access
//!
//! This module handles:
//! - FFmpeg initialization
//! - Forwarding libav log output into `tracing`
//! - Input context management (the production [`Demuxer`](crate::demuxer::Demuxer))
//! - Safe accessors for codec parameter fields

pub mod context;
pub mod helpers;

pub use context::InputContext;
pub use ffmpeg_next as ffmpeg;

use std::ffi::{c_char, c_int, c_void, CStr};
use std::sync::OnceLock;

use crate::error::FfmpegError;

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initialize the FFmpeg library.
///
/// Safe to call from every probe; only the first call does any work and its
/// outcome is remembered for the lifetime of the process.
pub fn init() -> Result<(), FfmpegError> {
    INIT.get_or_init(|| {
        ffmpeg::init().map_err(|e| e.to_string())?;
        tracing::info!("FFmpeg initialized");
        Ok(())
    })
    .clone()
    .map_err(|e| FfmpegError::InitFailed(format!("ffmpeg::init() failed: {}", e)))
}

/// Version of the linked libavformat, e.g. "libavformat 62.3.100".
/// Useful for debugging and reporting environment consistency.
pub fn version_info() -> String {
    let v = ffmpeg::format::version();
    format!("libavformat {}.{}.{}", v >> 16, (v >> 8) & 0xff, v & 0xff)
}

/// Map a libav log level name to its numeric value
pub fn parse_log_level(name: &str) -> Option<c_int> {
    let level = match name.to_ascii_lowercase().as_str() {
        "quiet" => ffmpeg::ffi::AV_LOG_QUIET as c_int,
        "panic" => ffmpeg::ffi::AV_LOG_PANIC as c_int,
        "fatal" => ffmpeg::ffi::AV_LOG_FATAL as c_int,
        "error" => ffmpeg::ffi::AV_LOG_ERROR as c_int,
        "warning" | "warn" => ffmpeg::ffi::AV_LOG_WARNING as c_int,
        "info" => ffmpeg::ffi::AV_LOG_INFO as c_int,
        "verbose" => ffmpeg::ffi::AV_LOG_VERBOSE as c_int,
        "debug" => ffmpeg::ffi::AV_LOG_DEBUG as c_int,
        "trace" => ffmpeg::ffi::AV_LOG_TRACE as c_int,
        _ => return None,
    };
    Some(level)
}

/// Route libav's own log output into `tracing` under the `ffmpeg` target.
///
/// Messages less severe than `level` are dropped inside libav.
///
/// **Safety & Ordering:** Must be called after `init()` and before any probing
/// threads start, because altering the global log callback is not thread-safe.
pub fn install_log_bridge(level: c_int) {
    // SAFETY: both functions modify global FFmpeg state and are safe to call
    // after `ffmpeg::init()`.
    unsafe {
        ffmpeg::ffi::av_log_set_level(level);
        ffmpeg::ffi::av_log_set_callback(Some(ffmpeg_log_callback));
    }
}

unsafe extern "C" fn ffmpeg_log_callback(
    avcl: *mut c_void,
    level: c_int,
    fmt: *const c_char,
    vl: ffmpeg::ffi::va_list,
) {
    if level > ffmpeg::ffi::av_log_get_level() {
        return;
    }

    // Format the message using FFmpeg's own vsnprintf helper
    let mut buf = [0 as c_char; 1024];
    let mut print_prefix: c_int = 1;
    ffmpeg::ffi::av_log_format_line(
        avcl,
        level,
        fmt,
        vl,
        buf.as_mut_ptr(),
        buf.len() as c_int,
        &mut print_prefix,
    );

    let line = CStr::from_ptr(buf.as_ptr()).to_string_lossy();
    let msg = line.trim_end();
    if msg.is_empty() {
        return;
    }

    if level <= ffmpeg::ffi::AV_LOG_ERROR as c_int {
        tracing::error!(target: "ffmpeg", "{}", msg);
    } else if level <= ffmpeg::ffi::AV_LOG_WARNING as c_int {
        tracing::warn!(target: "ffmpeg", "{}", msg);
    } else if level <= ffmpeg::ffi::AV_LOG_INFO as c_int {
        tracing::info!(target: "ffmpeg", "{}", msg);
    } else if level <= ffmpeg::ffi::AV_LOG_DEBUG as c_int {
        tracing::debug!(target: "ffmpeg", "{}", msg);
    } else {
        tracing::trace!(target: "ffmpeg", "{}", msg);
    }
}
