/// Platform services the core depends on.
///
/// Implemented once per host (browser, tests). All methods are associated
/// functions so models can stay generic over `E: Env` without holding a value.
pub trait Env {
    /// Returns a string that was never returned before by this environment.
    fn new_id() -> String;
}
