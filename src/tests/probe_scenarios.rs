//! Probe pipeline behaviour over scripted containers

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::ffmpeg_utils::ffmpeg::media::Type;
use crate::index::build_media_file;
use crate::tests::fixtures::ScriptedDemuxer;
use crate::types::{Kind, MediaFile, Stream};

fn build(demuxer: &ScriptedDemuxer) -> MediaFile {
    build_media_file(demuxer, &ProbeConfig::default())
}

fn ids(media: &MediaFile) -> Vec<usize> {
    media.streams().iter().map(|s| s.id).collect()
}

#[test]
fn test_recognized_streams_keep_native_order() {
    let demuxer = ScriptedDemuxer::new("/media/film.mkv")
        .video(5_000_000)
        .audio(640_000, Some("eng"))
        .audio(192_000, Some("fre"))
        .subtitle(Some("eng"))
        .best(Type::Video, 0)
        .best(Type::Audio, 1)
        .best(Type::Subtitle, 3);

    let media = build(&demuxer);
    assert_eq!(ids(&media), vec![0, 1, 2, 3]);
    assert_eq!(media.path(), std::path::Path::new("/media/film.mkv"));
    let languages: Vec<_> = media
        .streams_of(Kind::Audio)
        .iter()
        .map(|s| s.language.as_deref())
        .collect();
    assert_eq!(languages, vec![Some("eng"), Some("fre")]);
    assert_eq!(media.best_streams().len(), 3);
}

#[test]
fn test_unclassifiable_streams_are_dropped() {
    let demuxer = ScriptedDemuxer::new("/media/concert.mkv")
        .video(2_000_000)
        .data()
        .audio(256_000, None)
        .attachment()
        .best(Type::Video, 0)
        .best(Type::Audio, 2);

    let media = build(&demuxer);
    assert_eq!(ids(&media), vec![0, 2]);
    assert!(!demuxer.queries().contains(&Type::Data));
    assert!(!demuxer.queries().contains(&Type::Attachment));
}

#[test]
fn test_audio_with_cover_art() {
    let demuxer = ScriptedDemuxer::new("/music/track.mp3")
        .audio(128_000, Some("eng"))
        .cover_art()
        .best(Type::Audio, 0)
        .best(Type::Video, 1)
        .duration(215.3);

    let media = build(&demuxer);
    assert_eq!(
        media.streams(),
        &[Stream {
            id: 0,
            kind: Kind::Audio,
            bitrate: 128_000,
            language: Some("eng".to_string()),
            codec_description: "AAC (Advanced Audio Coding)".to_string(),
        }]
    );
    assert_eq!(media.best_streams().len(), 1);
    assert_eq!(media.best_streams().get(&Kind::Audio), Some(&0));
    assert!(media.streams_of(Kind::Video).is_empty());
    assert!(!media.has_kind(Kind::Video));
    // Cover art contributes no type, so video is never even queried
    assert_eq!(demuxer.queries(), vec![Type::Audio]);
    assert_eq!(media.duration(), Some(216));
}

#[test]
fn test_cover_art_lookup_is_not_found() {
    let demuxer = ScriptedDemuxer::new("/music/track.flac")
        .audio(900_000, None)
        .cover_art()
        .best(Type::Audio, 0);

    let media = build(&demuxer);
    assert!(matches!(media.stream(1), Err(ProbeError::StreamNotFound(1))));
    assert_eq!(media.stream(0).unwrap().bitrate, 900_000);
}

#[test]
fn test_audio_attached_pic_flag_is_ignored() {
    let demuxer = ScriptedDemuxer::new("/music/odd.m4a")
        .audio(96_000, None)
        .attached_pic()
        .best(Type::Audio, 0);

    let media = build(&demuxer);
    assert_eq!(ids(&media), vec![0]);
    assert_eq!(media.best_stream(Kind::Audio).map(|s| s.id), Some(0));
}

#[test]
fn test_missing_subtitle_best_stream_is_not_fatal() {
    let demuxer = ScriptedDemuxer::new("/media/episode.mkv")
        .video(3_000_000)
        .audio(384_000, Some("jpn"))
        .subtitle(Some("eng"))
        .best(Type::Video, 0)
        .best(Type::Audio, 1);

    let media = build(&demuxer);
    assert!(!media.best_streams().contains_key(&Kind::Subtitle));
    assert!(media.best_stream(Kind::Subtitle).is_none());
    // The subtitle stream itself is still listed
    assert_eq!(media.streams_of(Kind::Subtitle).len(), 1);
    assert_eq!(media.best_stream(Kind::Video).map(|s| s.id), Some(0));
}

#[test]
fn test_each_type_queried_once() {
    let demuxer = ScriptedDemuxer::new("/media/multi.mkv")
        .audio(128_000, Some("eng"))
        .video(8_000_000)
        .audio(128_000, Some("ger"))
        .audio(64_000, Some("ita"))
        .video(1_000_000)
        .best(Type::Audio, 2)
        .best(Type::Video, 1);

    let media = build(&demuxer);
    assert_eq!(demuxer.queries(), vec![Type::Audio, Type::Video]);
    assert_eq!(media.best_streams().get(&Kind::Audio), Some(&2));
    assert_eq!(media.best_streams().get(&Kind::Video), Some(&1));
    for kind in media.best_streams().keys() {
        assert!(media.has_kind(*kind));
    }
}

#[test]
fn test_decorative_best_pick_falls_back() {
    // Demuxer ranks the cover (e.g. default-flagged) above the real video
    let demuxer = ScriptedDemuxer::new("/media/music-video.mp4")
        .cover_art()
        .video(2_500_000)
        .video(800_000)
        .audio(160_000, None)
        .best(Type::Video, 0)
        .best(Type::Audio, 3);

    let media = build(&demuxer);
    assert_eq!(ids(&media), vec![1, 2, 3]);
    assert_eq!(media.best_streams().get(&Kind::Video), Some(&1));
    assert_eq!(media.best_stream(Kind::Video).map(|s| s.bitrate), Some(2_500_000));
}

#[test]
fn test_best_pick_of_wrong_kind_falls_back() {
    let demuxer = ScriptedDemuxer::new("/media/broken-best.mkv")
        .video(1_000_000)
        .audio(128_000, None)
        .best(Type::Video, 0)
        .best(Type::Audio, 0);

    let media = build(&demuxer);
    assert_eq!(media.best_streams().get(&Kind::Audio), Some(&1));
}

#[test]
fn test_every_best_id_resolves() {
    let demuxer = ScriptedDemuxer::new("/media/everything.mkv")
        .cover_art()
        .video(4_000_000)
        .audio(256_000, Some("eng"))
        .subtitle(Some("eng"))
        .subtitle(Some("spa"))
        .best(Type::Video, 0)
        .best(Type::Audio, 7)
        .best(Type::Subtitle, 4);

    let media = build(&demuxer);
    for (kind, id) in media.best_streams() {
        let stream = media.stream(*id).unwrap();
        assert_eq!(stream.kind, *kind);
    }
}

#[test]
fn test_duration_scenarios() {
    let media = build(&ScriptedDemuxer::new("/a.ogg").audio(0, None).duration(12.7));
    assert_eq!(media.duration(), Some(13));

    let media = build(&ScriptedDemuxer::new("/b.ogg").audio(0, None).duration(0.0));
    assert_eq!(media.duration(), None);

    let media = build(&ScriptedDemuxer::new("/c.ogg").audio(0, None));
    assert_eq!(media.duration(), None);
}

#[test]
fn test_empty_container() {
    let demuxer = ScriptedDemuxer::new("/media/empty.mka");
    let media = build(&demuxer);
    assert!(media.streams().is_empty());
    assert!(media.best_streams().is_empty());
    assert!(demuxer.queries().is_empty());
}

#[test]
fn test_unknown_bitrate_and_language() {
    let demuxer = ScriptedDemuxer::new("/media/raw.mkv")
        .audio(-1, None)
        .best(Type::Audio, 0);
    let media = build(&demuxer);
    let stream = media.stream(0).unwrap();
    assert_eq!(stream.bitrate, 0);
    assert_eq!(stream.language, None);
}

#[test]
fn test_build_is_idempotent() {
    let demuxer = ScriptedDemuxer::new("/media/film.mkv")
        .video(5_000_000)
        .cover_art()
        .audio(640_000, Some("eng"))
        .subtitle(None)
        .best(Type::Video, 0)
        .best(Type::Audio, 2)
        .duration(5400.2);

    let first = build(&demuxer);
    let second = build(&demuxer);
    assert_eq!(first.streams(), second.streams());
    assert_eq!(first.best_streams(), second.best_streams());
    assert_eq!(first, second);
}
