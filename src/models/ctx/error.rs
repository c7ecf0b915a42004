use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::types::{MediaError, VideoId};

#[derive(Clone, PartialEq, Debug)]
pub enum CtxError {
    VideoNotFound(VideoId),
    UnsupportedPlaybackSpeed(f64),
    Media(MediaError),
}

impl CtxError {
    pub fn message(&self) -> String {
        match &self {
            CtxError::VideoNotFound(id) => format!("Video {id} is not in the catalog"),
            CtxError::UnsupportedPlaybackSpeed(speed) => {
                format!("Playback speed {speed} is not supported")
            }
            CtxError::Media(error) => error.message(),
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            CtxError::VideoNotFound(_) => 1,
            CtxError::UnsupportedPlaybackSpeed(_) => 2,
            CtxError::Media(error) => 1000 + u64::from(error.code()),
        }
    }
    fn r#type(&self) -> &'static str {
        match &self {
            CtxError::VideoNotFound(_) => "VideoNotFound",
            CtxError::UnsupportedPlaybackSpeed(_) => "UnsupportedPlaybackSpeed",
            CtxError::Media(_) => "Media",
        }
    }
}

impl fmt::Display for CtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CtxError {}

impl Serialize for CtxError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CtxError", 3)?;
        state.serialize_field("type", self.r#type())?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<MediaError> for CtxError {
    fn from(error: MediaError) -> Self {
        CtxError::Media(error)
    }
}
