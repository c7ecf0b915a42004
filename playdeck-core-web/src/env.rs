use futures::Future;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use playdeck_core::runtime::Env;

pub enum WebEnv {}

impl WebEnv {
    /// Runs `future` on the browser event loop.
    pub fn exec_concurrent<F>(future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        spawn_local(future)
    }
}

impl Env for WebEnv {
    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}
