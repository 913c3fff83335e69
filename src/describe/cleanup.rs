//! Whitespace normalization for generated descriptions.

/// Normalizes a multi-line description.
///
/// Line endings become `\n`, every line is left-trimmed, runs of blank lines (including a
/// leading run) collapse to a single blank line and trailing blank lines are dropped. Applying it twice gives the same
/// result as applying it once.
///
/// # Examples
///
/// ```
/// use weather_calendar::clean_description;
///
/// let text = "  Cloud cover: 40%\r\n\r\n\r\n   Wind: 8 mph\n\n";
/// assert_eq!(clean_description(text), "Cloud cover: 40%\n\nWind: 8 mph");
/// ```
pub fn clean_description(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<&str> = Vec::new();
    for line in normalized.split('\n').map(str::trim_start) {
        let previous_blank = lines.last().is_some_and(|last| last.is_empty());
        if line.is_empty() && previous_blank {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
