use serde::Serialize;
use tracing::debug;

use crate::{
    models::{common::eq_update, ctx::CtxError},
    runtime::{
        msg::{Action, ActionCtx, Event, Internal, Msg},
        Effects, Env, Update,
    },
    types::{Video, VideoId},
};

/// Owns the catalog and the video bound to the player.
#[derive(Clone, Default, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Ctx {
    pub catalog: Vec<Video>,
    pub now_playing: Option<Video>,
}

impl Ctx {
    /// The first catalog entry starts as now playing.
    pub fn new(catalog: Vec<Video>) -> Self {
        let now_playing = catalog.first().cloned();
        Ctx {
            catalog,
            now_playing,
        }
    }
}

impl<E: Env> Update<E> for Ctx {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Ctx(ActionCtx::SelectVideo(id)))
            | Msg::Internal(Internal::VideoSelected(id)) => {
                select_video(&mut self.now_playing, &self.catalog, id)
            }
            _ => Effects::none().unchanged(),
        }
    }
}

fn select_video(now_playing: &mut Option<Video>, catalog: &[Video], id: &VideoId) -> Effects {
    match catalog.iter().find(|video| video.id == *id) {
        Some(video) => {
            let now_playing_effects = eq_update(now_playing, Some(video.to_owned()));
            if now_playing_effects.has_changed {
                debug!(id = %video.id, title = %video.title, "Now playing changed");
                now_playing_effects.join(
                    Effects::msgs(vec![
                        Msg::Internal(Internal::NowPlayingChanged),
                        Msg::Event(Event::VideoSelected { id: id.to_owned() }),
                    ])
                    .unchanged(),
                )
            } else {
                now_playing_effects
            }
        }
        None => {
            debug!(%id, "Selected video is not in the catalog");
            Effects::msg(Msg::Event(Event::Error {
                error: CtxError::VideoNotFound(id.to_owned()),
            }))
            .unchanged()
        }
    }
}
