use std::ops::Deref;

use enclose::enclose;
use tracing::{trace, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use playdeck_core::models::player::Player;
use playdeck_core::runtime::msg::{Action, ActionPlayer};
use playdeck_core::types::{MediaCommand, MediaError, PlayableMedia};

use crate::env::WebEnv;
use crate::playdeck_core_web::dispatch_action;

/// The `<video>` element the player drives.
#[derive(Clone)]
pub struct Media {
    element: HtmlMediaElement,
}

impl Media {
    /// The `src` attribute as it was set, not the resolved URL.
    pub fn source(&self) -> Option<String> {
        self.element.get_attribute("src")
    }
}

impl PlayableMedia for Media {
    fn play(&self) {
        match self.element.play() {
            Ok(promise) => WebEnv::exec_concurrent(async move {
                if let Err(error) = JsFuture::from(promise).await {
                    warn!(?error, "Media element refused to play");
                    dispatch_player(ActionPlayer::PausedChanged { paused: true });
                }
            }),
            Err(error) => warn!(?error, "Media element play failed"),
        }
    }
    fn pause(&self) {
        if let Err(error) = self.element.pause() {
            warn!(?error, "Media element pause failed");
        }
    }
    fn set_current_time(&self, time: f64) {
        self.element.set_current_time(time);
    }
    fn set_playback_rate(&self, rate: f64) {
        self.element.set_playback_rate(rate);
    }
    fn set_src(&self, src: &str) {
        trace!(src, "Loading media source");
        self.element.set_src(src);
    }
    fn current_time(&self) -> f64 {
        self.element.current_time()
    }
    fn duration(&self) -> Option<f64> {
        Some(self.element.duration()).filter(|duration| !duration.is_nan())
    }
}

/// A [`Media`] whose notifications are forwarded to the runtime.
///
/// Dropping it removes every listener it added, so a replaced element stops
/// dispatching.
pub struct MediaElement {
    media: Media,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl MediaElement {
    pub fn bind(element: HtmlMediaElement) -> Result<Self, JsValue> {
        let media = Media { element };
        let mut binding = MediaElement {
            media: media.to_owned(),
            listeners: vec![],
        };
        binding.listen(
            "timeupdate",
            enclose!((media) move || dispatch_player(media.time_changed())),
        )?;
        binding.listen(
            "durationchange",
            enclose!((media) move || dispatch_player(media.time_changed())),
        )?;
        binding.listen("play", || {
            dispatch_player(ActionPlayer::PausedChanged { paused: false })
        })?;
        binding.listen("pause", || {
            dispatch_player(ActionPlayer::PausedChanged { paused: true })
        })?;
        binding.listen("ended", || dispatch_player(ActionPlayer::Ended))?;
        binding.listen(
            "error",
            enclose!((media) move || {
                let error = media
                    .element
                    .error()
                    .map(|error| MediaError::from(error.code()))
                    .unwrap_or(MediaError::Other(0));
                dispatch_player(ActionPlayer::MediaFailed(error))
            }),
        )?;
        Ok(binding)
    }
    /// Brings a freshly bound element in line with `player`.
    pub fn sync(&self, player: &Player) {
        sync_commands(self.media.source().as_deref(), player)
            .iter()
            .for_each(|command| self.media.apply(command));
    }
    fn listen<F>(&mut self, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        self.media
            .element
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push((event, listener));
        Ok(())
    }
}

impl Deref for MediaElement {
    type Target = Media;

    fn deref(&self) -> &Self::Target {
        &self.media
    }
}

impl Drop for MediaElement {
    fn drop(&mut self) {
        for (event, listener) in self.listeners.drain(..) {
            if let Err(error) = self
                .media
                .element
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            {
                warn!(?error, event, "Media listener could not be removed");
            }
        }
    }
}

/// Commands that bring an element currently loaded with `current_src` in line
/// with `player`. The source is only reloaded when it differs.
pub fn sync_commands(current_src: Option<&str>, player: &Player) -> Vec<MediaCommand> {
    let load = player
        .selected
        .as_ref()
        .filter(|selected| current_src != Some(selected.src.as_str()))
        .map(|selected| MediaCommand::Load {
            src: selected.src.to_owned(),
        });
    load.into_iter()
        .chain(std::iter::once(MediaCommand::SetPlaybackRate {
            rate: player.playback_speed.rate(),
        }))
        .collect()
}

fn dispatch_player(action: ActionPlayer) {
    dispatch_action(Action::Player(action), None)
}
