/// Title and source of every video in the catalog, in catalog order.
pub const CATALOG: &[(&str, &str)] = &[
    ("Video 1", "video1.mp4"),
    ("Video 2", "video2.mp4"),
    ("Video 3", "video3.mp4"),
];
pub const PROGRESS_MIN: f64 = 0.0;
pub const PROGRESS_MAX: f64 = 100.0;
pub const TIME_PLACEHOLDER: &str = "00:00:00";
pub const DRAG_PAYLOAD_FORMAT: &str = "text/plain";
pub const RUNTIME_EVENTS_BUFFER: usize = 1000;
