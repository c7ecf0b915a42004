use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;

use playdeck_core::models::player::Player;

pub fn serialize_player(player: &Player) -> JsValue {
    <JsValue as JsValueSerdeExt>::from_serde(&model::Player::from(player))
        .expect("JsValue from Player")
}

mod model {
    use serde::Serialize;
    use strum::IntoEnumIterator;

    use playdeck_core::models::player::Selected;
    use playdeck_core::types::PlaybackSpeed;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SpeedOption {
        pub value: f64,
        pub label: String,
        pub selected: bool,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MediaError {
        pub code: u16,
        pub message: String,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Player<'a> {
        pub selected: Option<&'a Selected>,
        pub is_playing: bool,
        pub current_time: f64,
        pub duration: Option<f64>,
        /// Slider position, `0..=100`
        pub progress: f64,
        pub current_time_label: String,
        pub duration_label: String,
        pub playback_speed: PlaybackSpeed,
        pub speed_options: Vec<SpeedOption>,
        pub error: Option<MediaError>,
    }

    impl<'a> From<&'a playdeck_core::models::player::Player> for Player<'a> {
        fn from(player: &'a playdeck_core::models::player::Player) -> Self {
            Self {
                selected: player.selected.as_ref(),
                is_playing: player.is_playing,
                current_time: player.current_time,
                duration: player.duration,
                progress: player.progress(),
                current_time_label: player.current_time_label(),
                duration_label: player.duration_label(),
                playback_speed: player.playback_speed,
                speed_options: PlaybackSpeed::iter()
                    .map(|speed| SpeedOption {
                        value: speed.rate(),
                        label: speed.label(),
                        selected: speed == player.playback_speed,
                    })
                    .collect(),
                error: player.error.map(|error| MediaError {
                    code: error.code(),
                    message: error.message(),
                }),
            }
        }
    }

}
