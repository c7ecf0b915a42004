mod media;
pub use media::*;

mod playback_speed;
pub use playback_speed::*;

mod time;
pub use time::*;

mod video;
pub use video::*;
