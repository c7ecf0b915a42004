use crate::types::VideoId;

//
// Those messages are meant to be dispatched and handled only inside playdeck-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Dispatched when a playlist row is picked.
    VideoSelected(VideoId),
    /// Dispatched when the now-playing video changed.
    NowPlayingChanged,
}
