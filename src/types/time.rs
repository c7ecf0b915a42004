use crate::constants::{PROGRESS_MAX, PROGRESS_MIN, TIME_PLACEHOLDER};

/// Keeps a duration reported by the media element only when it is usable.
///
/// Browsers report `NaN` before metadata is loaded and `Infinity` for live
/// sources.
pub fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|duration| duration.is_finite() && *duration >= 0.0)
}

/// Clamps `time` into `[0, duration]`, or to `>= 0` while the duration is unknown.
pub fn clamp_time(time: f64, duration: Option<f64>) -> f64 {
    if !time.is_finite() {
        return 0.0;
    }
    match known_duration(duration) {
        Some(duration) => time.max(0.0).min(duration),
        None => time.max(0.0),
    }
}

/// Formats seconds as `HH:MM:SS`.
///
/// Fractions are truncated and hours are never rolled into days, so
/// `360000` seconds is `100:00:00`. Missing, negative or non-finite values
/// yield `00:00:00`.
pub fn format_time(seconds: Option<f64>) -> String {
    match seconds.filter(|seconds| seconds.is_finite() && *seconds >= 0.0) {
        Some(seconds) => {
            let total = seconds.trunc() as u64;
            format!(
                "{:02}:{:02}:{:02}",
                total / 3600,
                total % 3600 / 60,
                total % 60
            )
        }
        None => TIME_PLACEHOLDER.to_owned(),
    }
}

/// Slider position for `current_time`, `0` when the duration is unknown or zero.
pub fn progress(current_time: f64, duration: Option<f64>) -> f64 {
    match known_duration(duration).filter(|duration| *duration > 0.0) {
        Some(duration) if current_time.is_finite() => {
            (current_time / duration * PROGRESS_MAX).clamp(PROGRESS_MIN, PROGRESS_MAX)
        }
        _ => PROGRESS_MIN,
    }
}

/// Absolute time for a slider position, `None` when there is nothing to seek in.
pub fn seek_time(progress: f64, duration: Option<f64>) -> Option<f64> {
    known_duration(duration)
        .filter(|duration| *duration > 0.0 && progress.is_finite())
        .map(|duration| progress.clamp(PROGRESS_MIN, PROGRESS_MAX) / PROGRESS_MAX * duration)
}
