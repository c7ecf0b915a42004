pub mod common;
pub mod ctx;
pub mod player;
pub mod playlist;
