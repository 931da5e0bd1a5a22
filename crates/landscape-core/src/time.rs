/// Formats whole seconds as `HH:MM:SS`. Hours keep counting past 24.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Leading-integer parse: `"  3661.9s"` is 3661, `"abc"` and negatives are 0.
pub fn parse_leading_int(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(u64::MAX)
}
