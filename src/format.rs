use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// 1024-based size formatting: `1536.0` -> `"1.50KB"`.
///
/// Takes `f64` because throughput rates are fractional; raw byte counts
/// cast losslessly enough for display purposes.
pub fn format_size(bytes: f64) -> String {
    const FACTOR: f64 = 1024.0;
    const UNITS: [&str; 6] = ["", "K", "M", "G", "T", "P"];

    let mut value = bytes;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < FACTOR {
            return format!("{value:.2}{unit}B");
        }
        value /= FACTOR;
    }
    format!("{value:.2}PB")
}

pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_size(bytes_per_sec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_small_values() {
        assert_eq!(format_size(0.0), "0.00B");
        assert_eq!(format_size(512.0), "512.00B");
        assert_eq!(format_size(1023.0), "1023.00B");
    }

    #[test]
    fn format_size_unit_boundaries() {
        assert_eq!(format_size(1536.0), "1.50KB");
        assert_eq!(format_size(1_048_576.0), "1.00MB");
        assert_eq!(format_size(1_073_741_824.0), "1.00GB");
        assert_eq!(format_size(1_099_511_627_776.0), "1.00TB");
    }

    #[test]
    fn format_size_saturates_at_petabytes() {
        let huge = 1024f64.powi(6) * 3.0;
        assert_eq!(format_size(huge), "3072.00PB");
    }

    #[test]
    fn format_rate_appends_per_second() {
        assert_eq!(format_rate(1536.0), "1.50KB/s");
    }

    #[test]
    fn truncate_unicode_fits_and_ellipsizes() {
        assert_eq!(truncate_unicode("short", 10), "short");
        assert_eq!(truncate_unicode("a_longer_name", 8), "a_longe\u{2026}");
    }
}
