/// Format a duration as `"Hh Mm"`, or `"Mm"` below one hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rem = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rem}m")
    } else {
        format!("{rem}m")
    }
}
