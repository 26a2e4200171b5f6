//! Safe wrappers around FFmpeg FFI calls.
//!
//! All `unsafe` blocks are contained here with explicit safety arguments.
//! Callers outside this module should never need to write `unsafe` for
//! routine FFmpeg access.

use std::ffi::CStr;

use ffmpeg_next as ffmpeg;

/// Read `bit_rate` from an `AVCodecParameters` struct.
///
/// `ffmpeg-next` does not expose this field through a safe accessor.
pub fn codec_params_bit_rate(params: &ffmpeg::codec::parameters::Parameters) -> i64 {
    // SAFETY: `params.as_ptr()` returns a valid non-null pointer for the
    // lifetime of `params`.  `bit_rate` is a plain i64 field with no
    // ownership semantics.
    unsafe { (*params.as_ptr()).bit_rate }
}

/// Human-readable codec label, e.g. "AAC (Advanced Audio Coding)".
///
/// Uses the codec descriptor's long name, falling back to the short name for
/// ids without a descriptor.
pub fn codec_description(id: ffmpeg::codec::Id) -> String {
    // SAFETY: `avcodec_descriptor_get` returns null or a pointer into libav's
    // static descriptor table, valid for the life of the process.
    // `long_name` is either null or a NUL-terminated static string.
    unsafe {
        let desc = ffmpeg::ffi::avcodec_descriptor_get(id.into());
        if !desc.is_null() && !(*desc).long_name.is_null() {
            return CStr::from_ptr((*desc).long_name)
                .to_string_lossy()
                .into_owned();
        }
    }
    id.name().to_string()
}
