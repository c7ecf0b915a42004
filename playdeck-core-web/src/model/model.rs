#[cfg(debug_assertions)]
use serde::Serialize;

use wasm_bindgen::JsValue;

use playdeck_core::{
    models::{ctx::Ctx, player::Player, playlist::Playlist},
    runtime::Effects,
    types::default_catalog,
    Model,
};

use crate::{
    env::WebEnv,
    model::{serialize_ctx, serialize_player, serialize_playlist},
};

#[derive(Model, Clone)]
#[cfg_attr(debug_assertions, derive(Serialize))]
#[model(WebEnv)]
pub struct WebModel {
    pub ctx: Ctx,
    pub player: Player,
    pub playlist: Playlist,
}

impl WebModel {
    pub fn new() -> (WebModel, Effects) {
        let ctx = Ctx::new(default_catalog::<WebEnv>());
        let (player, player_effects) = Player::new(&ctx);
        let playlist = Playlist::new(&ctx.catalog);
        let model = WebModel {
            ctx,
            player,
            playlist,
        };
        (model, player_effects)
    }
    pub fn get_state(&self, field: &WebModelField) -> JsValue {
        match field {
            WebModelField::Ctx => serialize_ctx(&self.ctx),
            WebModelField::Player => serialize_player(&self.player),
            WebModelField::Playlist => serialize_playlist(&self.playlist, &self.ctx),
        }
    }
}
