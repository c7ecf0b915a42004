use std::cmp;

use itertools::Itertools;
use serde::Serialize;
use tracing::trace;

use crate::models::ctx::Ctx;
use crate::runtime::msg::{Action, ActionPlaylist, Event, Internal, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::Video;

/// Local, reorderable copy of the catalog.
///
/// Reordering never touches [`Ctx::catalog`].
#[derive(Clone, Default, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub videos: Vec<Video>,
}

impl Playlist {
    pub fn new(catalog: &[Video]) -> Self {
        Playlist {
            videos: catalog.to_vec(),
        }
    }
}

impl<E: Env> UpdateWithCtx<E> for Playlist {
    fn update(&mut self, msg: &Msg, _: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Playlist(ActionPlaylist::SelectRow { id })) => {
                match self.videos.iter().find(|video| video.id == *id) {
                    Some(video) => Effects::msg(Msg::Internal(Internal::VideoSelected(
                        video.id.to_owned(),
                    )))
                    .unchanged(),
                    _ => {
                        trace!(%id, "Selected row is not in the playlist");
                        Effects::none().unchanged()
                    }
                }
            }
            Msg::Action(Action::Playlist(ActionPlaylist::CompleteDrag {
                dragged_id,
                target_index,
            })) => {
                if move_video(&mut self.videos, dragged_id, *target_index) {
                    Effects::msg(Msg::Event(Event::PlaylistReordered {
                        ids: self.videos.iter().map(|video| video.id.to_owned()).collect(),
                    }))
                } else {
                    trace!(%dragged_id, target_index, "Drag left the playlist unchanged");
                    Effects::none().unchanged()
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

/// Moves the video with `id` so that it ends up at `target_index`.
///
/// The index is clamped into `0..=len` of the list after removal. Returns
/// `false` when `id` is unknown or the video is already there.
pub fn move_video(videos: &mut Vec<Video>, id: &str, target_index: i64) -> bool {
    match videos.iter().find_position(|video| video.id == id) {
        Some((position, _)) => {
            let video = videos.remove(position);
            let target_index = usize::try_from(cmp::max(target_index, 0))
                .map_or(videos.len(), |index| cmp::min(index, videos.len()));
            videos.insert(target_index, video);
            position != target_index
        }
        _ => false,
    }
}
