use std::fmt;

use serde::{Deserialize, Serialize};

use crate::runtime::msg::ActionPlayer;

/// Imperative command for the media element bound to the player.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "command", content = "args")]
pub enum MediaCommand {
    Load { src: String },
    Play,
    Pause,
    Seek { time: f64 },
    SetPlaybackRate { rate: f64 },
}

/// Failure reported by the media element, keyed by the HTML `MediaError` code.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(from = "u16", into = "u16")]
pub enum MediaError {
    Aborted,
    Network,
    Decode,
    SourceNotSupported,
    Other(u16),
}

impl MediaError {
    pub fn message(&self) -> String {
        match &self {
            MediaError::Aborted => "Media playback was aborted".to_owned(),
            MediaError::Network => "Network error while loading media".to_owned(),
            MediaError::Decode => "Media could not be decoded".to_owned(),
            MediaError::SourceNotSupported => "Media source is not supported".to_owned(),
            MediaError::Other(code) => format!("Unknown media error: {code}"),
        }
    }
    pub fn code(&self) -> u16 {
        match &self {
            MediaError::Aborted => 1,
            MediaError::Network => 2,
            MediaError::Decode => 3,
            MediaError::SourceNotSupported => 4,
            MediaError::Other(code) => *code,
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<u16> for MediaError {
    fn from(code: u16) -> Self {
        match code {
            1 => MediaError::Aborted,
            2 => MediaError::Network,
            3 => MediaError::Decode,
            4 => MediaError::SourceNotSupported,
            code => MediaError::Other(code),
        }
    }
}

impl From<MediaError> for u16 {
    fn from(error: MediaError) -> Self {
        error.code()
    }
}

/// A media element the player can drive.
///
/// Notifications flow the other way: the host listens to the element and
/// dispatches the matching [`ActionPlayer`].
pub trait PlayableMedia {
    fn play(&self);
    fn pause(&self);
    fn set_current_time(&self, time: f64);
    fn set_playback_rate(&self, rate: f64);
    fn set_src(&self, src: &str);
    fn current_time(&self) -> f64;
    /// `None` until the element knows the duration.
    fn duration(&self) -> Option<f64>;

    fn apply(&self, command: &MediaCommand) {
        match command {
            MediaCommand::Load { src } => self.set_src(src),
            MediaCommand::Play => self.play(),
            MediaCommand::Pause => self.pause(),
            MediaCommand::Seek { time } => self.set_current_time(*time),
            MediaCommand::SetPlaybackRate { rate } => self.set_playback_rate(*rate),
        }
    }
    fn time_changed(&self) -> ActionPlayer {
        ActionPlayer::TimeChanged {
            time: self.current_time(),
            duration: self.duration(),
        }
    }
}
