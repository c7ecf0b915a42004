use serde::Deserialize;

use crate::types::{MediaError, VideoId};

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionCtx {
    /// Binds the catalog video with the given id to the player.
    SelectVideo(VideoId),
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionPlayer {
    TogglePlay,
    /// Live position reported by the media element on `timeupdate`.
    ///
    /// `duration` is `None` until the element knows it.
    TimeChanged {
        time: f64,
        duration: Option<f64>,
    },
    PausedChanged {
        paused: bool,
    },
    Ended,
    MediaFailed(MediaError),
    /// Jumps to `progress` percent of the duration, in the `0..=100` range.
    Seek {
        progress: f64,
    },
    SetPlaybackSpeed {
        speed: f64,
    },
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionPlaylist {
    SelectRow {
        id: VideoId,
    },
    #[serde(rename_all = "camelCase")]
    CompleteDrag {
        dragged_id: VideoId,
        /// Final position of the dragged row. Out of range values are clamped.
        target_index: i64,
    },
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `playdeck-core` crate and handled by the `playdeck-core` crate.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Ctx(ActionCtx),
    Player(ActionPlayer),
    Playlist(ActionPlaylist),
}
