mod env;
pub use env::*;

pub use media::*;
