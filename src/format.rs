use chrono::NaiveTime;

/// Renders a stored `HH:MM:SS` time as a display label like `16時10分`.
/// The hour is unpadded, the minute keeps two digits. Anything that does not
/// parse as a time comes back unchanged; a bad row should never break the
/// today-list.
pub fn format_time_label(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M:%S") {
        Ok(parsed) => {
            use chrono::Timelike;
            format!("{}時{:02}分", parsed.hour(), parsed.minute())
        }
        Err(_) => time.to_string(),
    }
}
