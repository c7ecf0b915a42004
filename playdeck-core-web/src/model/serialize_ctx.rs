use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;

use playdeck_core::models::ctx::Ctx;

pub fn serialize_ctx(ctx: &Ctx) -> JsValue {
    <JsValue as JsValueSerdeExt>::from_serde(&model::Ctx::from(ctx)).expect("JsValue from Ctx")
}

mod model {
    use serde::Serialize;

    use playdeck_core::types::Video;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Ctx<'a> {
        pub catalog: &'a [Video],
        pub now_playing: Option<&'a Video>,
    }

    impl<'a> From<&'a playdeck_core::models::ctx::Ctx> for Ctx<'a> {
        fn from(ctx: &'a playdeck_core::models::ctx::Ctx) -> Self {
            Self {
                catalog: &ctx.catalog,
                now_playing: ctx.now_playing.as_ref(),
            }
        }
    }
}
