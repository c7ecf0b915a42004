use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;

use playdeck_core::models::{ctx::Ctx, playlist::Playlist};

pub fn serialize_playlist(playlist: &Playlist, ctx: &Ctx) -> JsValue {
    <JsValue as JsValueSerdeExt>::from_serde(&model::Playlist::new(playlist, ctx))
        .expect("JsValue from Playlist")
}

mod model {
    use serde::Serialize;

    use playdeck_core::models::ctx::Ctx;

    /// One draggable row. `index` is written to the row's `data-index`.
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Row<'a> {
        pub id: &'a str,
        pub title: &'a str,
        pub index: usize,
        pub selected: bool,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Playlist<'a> {
        pub rows: Vec<Row<'a>>,
    }

    impl<'a> Playlist<'a> {
        pub fn new(playlist: &'a playdeck_core::models::playlist::Playlist, ctx: &Ctx) -> Self {
            let now_playing = ctx.now_playing.as_ref().map(|video| video.id.as_str());
            Self {
                rows: playlist
                    .videos
                    .iter()
                    .enumerate()
                    .map(|(index, video)| Row {
                        id: &video.id,
                        title: &video.title,
                        index,
                        selected: now_playing == Some(video.id.as_str()),
                    })
                    .collect(),
            }
        }
    }

}
