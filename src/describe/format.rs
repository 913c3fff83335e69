//! Number formatting shared by summary and description lines.

/// Formats `value` with `decimals` places, then strips trailing zeros and a dangling dot.
///
/// # Examples
///
/// ```
/// use weather_calendar::format_float;
///
/// assert_eq!(format_float(1.5, 2), "1.5");
/// assert_eq!(format_float(2.0, 2), "2");
/// assert_eq!(format_float(0.126, 2), "0.13");
/// ```
pub fn format_float(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Rounds to the nearest integer for display, never printing `-0`.
pub fn format_rounded(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Formats a duration given in fractional hours as `"Xh"`, `"Ym"` or `"Xh Ym"`.
///
/// Minutes are rounded to the nearest whole minute, so 59.6 minutes carry into the next
/// hour. Zero (or a negative duration) is `"0h"`.
///
/// # Examples
///
/// ```
/// use weather_calendar::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(2.5), "2h 30m");
/// assert_eq!(format_hours_minutes(0.25), "15m");
/// assert_eq!(format_hours_minutes(3.0), "3h");
/// ```
pub fn format_hours_minutes(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return "0h".to_string();
    }
    let mut whole_hours = hours.trunc() as u64;
    let mut minutes = ((hours - hours.trunc()) * 60.0).round() as u64;
    if minutes == 60 {
        whole_hours += 1;
        minutes = 0;
    }

    match (whole_hours, minutes) {
        (0, 0) => "0h".to_string(),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
