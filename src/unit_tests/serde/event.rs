use serde_json::json;

use crate::{
    models::ctx::CtxError,
    runtime::msg::Event,
    types::{MediaCommand, MediaError},
};

#[test]
fn ser_event_media_command_seek() {
    assert_eq!(
        serde_json::to_value(Event::MediaCommand {
            command: MediaCommand::Seek { time: 100.0 }
        })
        .unwrap(),
        json!({
            "event": "MediaCommand",
            "args": { "command": { "command": "Seek", "args": { "time": 100.0 } } }
        })
    );
}

#[test]
fn ser_event_media_command_play() {
    assert_eq!(
        serde_json::to_value(Event::MediaCommand {
            command: MediaCommand::Play
        })
        .unwrap(),
        json!({
            "event": "MediaCommand",
            "args": { "command": { "command": "Play" } }
        })
    );
}

#[test]
fn ser_event_playlist_reordered() {
    assert_eq!(
        serde_json::to_value(Event::PlaylistReordered {
            ids: vec!["video_2".to_owned(), "video_1".to_owned()]
        })
        .unwrap(),
        json!({
            "event": "PlaylistReordered",
            "args": { "ids": ["video_2", "video_1"] }
        })
    );
}

#[test]
fn ser_event_error() {
    assert_eq!(
        serde_json::to_value(Event::Error {
            error: CtxError::VideoNotFound("video_9".to_owned())
        })
        .unwrap(),
        json!({
            "event": "Error",
            "args": {
                "error": {
                    "type": "VideoNotFound",
                    "code": 1,
                    "message": "Video video_9 is not in the catalog"
                }
            }
        })
    );
}

#[test]
fn ser_event_media_error() {
    assert_eq!(
        serde_json::to_value(Event::Error {
            error: CtxError::Media(MediaError::SourceNotSupported)
        })
        .unwrap(),
        json!({
            "event": "Error",
            "args": {
                "error": {
                    "type": "Media",
                    "code": 1004,
                    "message": "Media source is not supported"
                }
            }
        })
    );
}
