//! Utility functions shared by the analyzer crates.

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Cuts on character boundaries, so multi-byte UTF-8 input is safe.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}...", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

/// Express a ratio as a whole percentage, rounding half up.
pub fn as_percent(ratio: f64) -> i64 {
    (ratio * 100.0 + 0.5).floor() as i64
}

/// Clamp a score into `[min, max]`, mapping NaN to `min`.
pub fn clamp_score(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
