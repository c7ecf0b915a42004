use std::convert::TryFrom;

use serde::Serialize;
use tracing::{debug, trace};

use crate::models::common::eq_update;
use crate::models::ctx::{Ctx, CtxError};
use crate::runtime::msg::{Action, ActionPlayer, Event, Internal, Msg};
use crate::runtime::{Effects, Env, UpdateWithCtx};
use crate::types::{
    clamp_time, format_time, known_duration, progress, seek_time, MediaCommand, MediaError,
    PlaybackSpeed, Video, VideoId,
};

/// The source the player is bound to.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub id: VideoId,
    pub src: String,
}

impl From<&Video> for Selected {
    fn from(video: &Video) -> Self {
        Selected {
            id: video.id.to_owned(),
            src: video.src.to_owned(),
        }
    }
}

/// Transport state of the bound source.
///
/// Everything except `selected` is reset whenever the source changes.
#[derive(Clone, Default, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub selected: Option<Selected>,
    pub is_playing: bool,
    pub current_time: f64,
    /// `None` until the media element reports it.
    pub duration: Option<f64>,
    pub playback_speed: PlaybackSpeed,
    pub error: Option<MediaError>,
}

impl Player {
    /// Binds a new player to the video now playing in `ctx`.
    pub fn new(ctx: &Ctx) -> (Self, Effects) {
        let mut player = Player::default();
        let effects = selected_update(&mut player, ctx);
        (player, effects)
    }
    /// Slider value in `0..=100`.
    pub fn progress(&self) -> f64 {
        progress(self.current_time, self.duration)
    }
    pub fn current_time_label(&self) -> String {
        format_time(Some(self.current_time))
    }
    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }
}

impl<E: Env> UpdateWithCtx<E> for Player {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Internal(Internal::NowPlayingChanged) => selected_update(self, ctx),
            Msg::Action(Action::Player(action)) if self.selected.is_some() => match action {
                ActionPlayer::TogglePlay => {
                    let (is_playing, command) = if self.is_playing {
                        (false, MediaCommand::Pause)
                    } else {
                        (true, MediaCommand::Play)
                    };
                    let is_playing_effects = eq_update(&mut self.is_playing, is_playing);
                    let error_effects = if is_playing {
                        eq_update(&mut self.error, None)
                    } else {
                        Effects::none().unchanged()
                    };
                    is_playing_effects
                        .join(error_effects)
                        .join(media_command_effects(command))
                }
                ActionPlayer::TimeChanged { time, duration } => {
                    let duration = known_duration(*duration);
                    let time = clamp_time(*time, duration);
                    let duration_effects = eq_update(&mut self.duration, duration);
                    let current_time_effects = eq_update(&mut self.current_time, time);
                    duration_effects.join(current_time_effects)
                }
                ActionPlayer::PausedChanged { paused } => eq_update(&mut self.is_playing, !paused),
                ActionPlayer::Ended => {
                    let is_playing_effects = eq_update(&mut self.is_playing, false);
                    let ended_effects = match &self.selected {
                        Some(selected) => Effects::msg(Msg::Event(Event::PlayerEnded {
                            id: selected.id.to_owned(),
                        }))
                        .unchanged(),
                        _ => Effects::none().unchanged(),
                    };
                    is_playing_effects.join(ended_effects)
                }
                ActionPlayer::MediaFailed(error) => {
                    debug!(%error, code = error.code(), "Media element failed");
                    let is_playing_effects = eq_update(&mut self.is_playing, false);
                    let error_effects = eq_update(&mut self.error, Some(*error));
                    is_playing_effects.join(error_effects).join(
                        Effects::msg(Msg::Event(Event::Error {
                            error: CtxError::from(*error),
                        }))
                        .unchanged(),
                    )
                }
                ActionPlayer::Seek { progress } => match seek_time(*progress, self.duration) {
                    Some(time) => eq_update(&mut self.current_time, time)
                        .join(media_command_effects(MediaCommand::Seek { time })),
                    _ => {
                        trace!(progress, "Seek ignored while the duration is unknown");
                        Effects::none().unchanged()
                    }
                },
                ActionPlayer::SetPlaybackSpeed { speed } => match PlaybackSpeed::try_from(*speed) {
                    Ok(speed) => eq_update(&mut self.playback_speed, speed).join(
                        media_command_effects(MediaCommand::SetPlaybackRate { rate: speed.rate() }),
                    ),
                    Err(error) => {
                        debug!(%error, "Playback speed rejected");
                        Effects::msg(Msg::Event(Event::Error { error })).unchanged()
                    }
                },
            },
            _ => Effects::none().unchanged(),
        }
    }
}

fn selected_update(player: &mut Player, ctx: &Ctx) -> Effects {
    let next_selected = ctx.now_playing.as_ref().map(Selected::from);
    if player.selected == next_selected {
        return Effects::none().unchanged();
    }
    let load_effects = match &next_selected {
        Some(selected) => media_command_effects(MediaCommand::Load {
            src: selected.src.to_owned(),
        }),
        _ => Effects::none().unchanged(),
    };
    *player = Player {
        selected: next_selected,
        ..Player::default()
    };
    Effects::none().join(load_effects)
}

fn media_command_effects(command: MediaCommand) -> Effects {
    Effects::msg(Msg::Event(Event::MediaCommand { command })).unchanged()
}
