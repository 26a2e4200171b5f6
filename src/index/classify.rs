//! Native codec type classification and cover-art detection

use ffmpeg_next as ffmpeg;

use crate::demuxer::NativeStream;
use crate::types::Kind;

/// Map a native media type to a playable kind.
///
/// Data, attachment and unknown streams yield `None` and are not playable.
pub fn classify(medium: ffmpeg::media::Type) -> Option<Kind> {
    match medium {
        ffmpeg::media::Type::Video => Some(Kind::Video),
        ffmpeg::media::Type::Audio => Some(Kind::Audio),
        ffmpeg::media::Type::Subtitle => Some(Kind::Subtitle),
        ffmpeg::media::Type::Data
        | ffmpeg::media::Type::Attachment
        | ffmpeg::media::Type::Unknown => None,
    }
}

/// Check whether a stream is embedded artwork posing as video.
///
/// Only video streams are ever decorative; an audio or subtitle stream with
/// the attached-picture flag is kept.
pub fn is_decorative(stream: &NativeStream) -> bool {
    classify(stream.medium) == Some(Kind::Video) && stream.attached_pic
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn native(medium: ffmpeg::media::Type, attached_pic: bool) -> NativeStream {
        NativeStream {
            index: 0,
            medium,
            bit_rate: 0,
            codec_description: String::new(),
            attached_pic,
            tags: BTreeMap::new(),
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(ffmpeg::media::Type::Video), Some(Kind::Video));
        assert_eq!(classify(ffmpeg::media::Type::Audio), Some(Kind::Audio));
        assert_eq!(classify(ffmpeg::media::Type::Subtitle), Some(Kind::Subtitle));
        assert_eq!(classify(ffmpeg::media::Type::Data), None);
        assert_eq!(classify(ffmpeg::media::Type::Attachment), None);
        assert_eq!(classify(ffmpeg::media::Type::Unknown), None);
    }

    #[test]
    fn test_is_decorative() {
        assert!(is_decorative(&native(ffmpeg::media::Type::Video, true)));
        assert!(!is_decorative(&native(ffmpeg::media::Type::Video, false)));
        assert!(!is_decorative(&native(ffmpeg::media::Type::Audio, true)));
        assert!(!is_decorative(&native(ffmpeg::media::Type::Subtitle, true)));
    }
}
