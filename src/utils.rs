/// Utility helpers shared across the site components

/// Format a playback position as `m:ss`.
/// Anything that is not a finite, non-negative number renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let whole = seconds.floor() as u64;
    let minutes = whole / 60;
    let remaining = whole % 60;
    format!("{}:{:02}", minutes, remaining)
}

/// Clamp a ratio into `[0, 1]`, mapping NaN to zero.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// CSS percentage for a clamped ratio, e.g. `0.25` -> `"25%"`.
pub fn percent(ratio: f64) -> String {
    format!("{}%", clamp_ratio(ratio) * 100.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn non_finite_times_render_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn ratios_are_clamped() {
        assert_eq!(clamp_ratio(-0.5), 0.0);
        assert_eq!(clamp_ratio(1.7), 1.0);
        assert_eq!(clamp_ratio(f64::NAN), 0.0);
        assert_eq!(percent(0.25), "25%");
        assert_eq!(percent(2.0), "100%");
    }
}
