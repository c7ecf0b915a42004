use std::convert::TryFrom;

use derivative::Derivative;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::models::ctx::CtxError;

/// Playback rates offered by the speed selector.
///
/// Serialized as the numeric rate. Any other number is rejected.
#[derive(Derivative, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Debug)]
#[derivative(Default)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackSpeed {
    Half,
    #[derivative(Default)]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackSpeed {
    pub fn rate(self) -> f64 {
        match self {
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::OneAndHalf => 1.5,
            PlaybackSpeed::Double => 2.0,
        }
    }
    /// `0.5x`, `1x`, `1.5x` or `2x`.
    pub fn label(self) -> String {
        format!("{}x", self.rate())
    }
}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = CtxError;

    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        PlaybackSpeed::iter()
            .find(|speed| speed.rate() == rate)
            .ok_or(CtxError::UnsupportedPlaybackSpeed(rate))
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> Self {
        speed.rate()
    }
}
