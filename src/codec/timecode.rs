use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle::seconds_to_ms;

// @const: Single timecode, hours optional (WebVTT allows MM:SS.mmm)
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+):)?(\d{1,2}):(\d{2})[,.](\d{3})$").unwrap()
});

// @const: Cue timing line; anything after the end timecode is cue settings
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+)\s+-->\s+(\S+)(?:\s+.*)?$").unwrap()
});

/// Millisecond separator used by a subtitle format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimecodeStyle {
    /// `HH:MM:SS,mmm` (SubRip)
    Comma,
    /// `HH:MM:SS.mmm` (WebVTT)
    Dot,
}

impl TimecodeStyle {
    fn separator(self) -> char {
        match self {
            TimecodeStyle::Comma => ',',
            TimecodeStyle::Dot => '.',
        }
    }
}

/// Format seconds as `HH:MM:SS,mmm` / `HH:MM:SS.mmm`, rounded to the nearest millisecond
pub fn format_timecode(seconds: f64, style: TimecodeStyle) -> String {
    let ms = seconds_to_ms(seconds);
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let secs = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02}{}{:03}", hours, minutes, secs, style.separator(), millis)
}

/// Parse a single timecode into seconds.
///
/// Accepts either millisecond separator and an optional hour field. Returns
/// `None` for anything else, including out-of-range minutes or seconds and
/// hour fields too large to represent in milliseconds.
pub fn parse_timecode(timecode: &str) -> Option<f64> {
    let caps = TIMECODE_REGEX.captures(timecode.trim())?;

    let hours: u64 = caps.get(1).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let minutes: u64 = caps.get(2)?.as_str().parse().ok()?;
    let seconds: u64 = caps.get(3)?.as_str().parse().ok()?;
    let millis: u64 = caps.get(4)?.as_str().parse().ok()?;

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let total_ms = hours
        .checked_mul(3_600_000)?
        .checked_add(minutes * 60_000 + seconds * 1_000 + millis)?;
    Some(total_ms as f64 / 1000.0)
}

/// Parse a `start --> end [settings]` line into a pair of seconds
pub fn parse_timing_line(line: &str) -> Option<(f64, f64)> {
    let caps = TIMING_LINE_REGEX.captures(line)?;
    let start = parse_timecode(caps.get(1)?.as_str())?;
    let end = parse_timecode(caps.get(2)?.as_str())?;
    Some((start, end))
}
