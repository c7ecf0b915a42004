use serde::Serialize;

use crate::{
    models::ctx::CtxError,
    types::{MediaCommand, VideoId},
};

/// Outgoing notifications.
///
/// Those messages are meant to be dispatched by the `playdeck-core` crate and
/// handled by the users of the `playdeck-core` crate.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    VideoSelected {
        id: VideoId,
    },
    PlaylistReordered {
        ids: Vec<VideoId>,
    },
    /// The host must apply `command` to the media element bound to the player.
    MediaCommand {
        command: MediaCommand,
    },
    PlayerEnded {
        id: VideoId,
    },
    Error {
        error: CtxError,
    },
}
