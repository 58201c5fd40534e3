/// Truncate string to a max length, adding an ellipsis when truncated.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let take = max_len - 3;
    let mut truncated: String = s.chars().take(take).collect();
    truncated.push_str("...");
    truncated
}

/// Format a timestamp as relative time (e.g., "2m ago", "1h ago").
pub fn format_relative_time(timestamp: u64) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let diff = now.saturating_sub(timestamp);

    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else if diff < 604800 {
        format!("{}d ago", diff / 86400)
    } else {
        format!("{}w ago", diff / 604800)
    }
}

/// Render a 0-10 value as a fixed-width meter ("█████░░░░░").
pub fn meter(value: f64, width: usize) -> String {
    let clamped = value.clamp(0.0, 10.0);
    let filled = ((clamped / 10.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One-decimal score, e.g. "8.4".
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0.0, 10), "░".repeat(10));
        assert_eq!(meter(10.0, 10), "█".repeat(10));
        assert_eq!(meter(5.0, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
        // Out-of-range values clamp instead of overflowing the bar
        assert_eq!(meter(42.0, 4), "█".repeat(4));
        assert_eq!(meter(-1.0, 4), "░".repeat(4));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(8.44), "8.4");
        assert_eq!(format_score(9.0), "9.0");
    }
}
