// Small presentation helpers shared across the engine and GUI.
use std::time::Duration;

/// Windows narrower than this get the compact theme button.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Ease-out quartic curve over `progress` in [0, 1].
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Value shown by a counting animation `elapsed` into a run of `duration`.
pub fn count_at(end_value: u32, elapsed: Duration, duration: Duration) -> u32 {
    if duration.is_zero() {
        return end_value;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (end_value as f64 * ease_out_quart(progress)).floor() as u32
}
