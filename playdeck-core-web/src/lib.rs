#[allow(clippy::module_inception)]
pub mod model {
    pub use {
        model::*, serialize_ctx::serialize_ctx, serialize_player::serialize_player,
        serialize_playlist::serialize_playlist,
    };

    mod model;

    pub mod serialize_ctx;
    pub mod serialize_player;
    pub mod serialize_playlist;
}

pub mod env;
pub mod media;

mod playdeck_core_web;
// re-export all wasm-specific
pub use playdeck_core_web::*;
