use unicode_width::UnicodeWidthStr;

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Truncate a habit name to a display width, appending "…" when cut.
/// Width is measured in terminal columns, not chars.
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    let mut out = String::new();
    for c in name.chars() {
        let candidate = format!("{}{}", out, c);
        if candidate.width() + 1 > max_width {
            break;
        }
        out = candidate;
    }
    format!("{}…", out)
}
