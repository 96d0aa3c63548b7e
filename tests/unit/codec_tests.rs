/*!
 * Tests for the SRT / WebVTT codec and timecode helpers
 */

use titlovi::codec::timecode::{format_timecode, parse_timecode, parse_timing_line, TimecodeStyle};
use titlovi::codec::{self, SubtitleFormat};
use titlovi::subtitle::Cue;

/// Test timecode rendering for both styles
#[test]
fn test_formatTimecode_withBothStyles_shouldUseFormatSeparator() {
    assert_eq!(format_timecode(3661.5, TimecodeStyle::Comma), "01:01:01,500");
    assert_eq!(format_timecode(3661.5, TimecodeStyle::Dot), "01:01:01.500");
}

/// Test that timecodes round to the nearest millisecond
#[test]
fn test_formatTimecode_withSubMillisecond_shouldRoundToNearest() {
    assert_eq!(format_timecode(1.9996, TimecodeStyle::Comma), "00:00:02,000");
    assert_eq!(format_timecode(0.0004, TimecodeStyle::Comma), "00:00:00,000");
}

/// Test timecode parsing with and without hours
#[test]
fn test_parseTimecode_withOptionalHours_shouldParseBoth() {
    assert_eq!(parse_timecode("00:00:01,250"), Some(1.25));
    assert_eq!(parse_timecode("01:02.500"), Some(62.5));
    assert_eq!(parse_timecode("00:61:00,000"), None);
    assert_eq!(parse_timecode("garbage"), None);
}

/// Test timing line parsing with trailing cue settings
#[test]
fn test_parseTimingLine_withSettings_shouldIgnoreSettings() {
    let parsed = parse_timing_line("00:00:01.000 --> 00:00:02.000 line:90% align:middle");
    assert_eq!(parsed, Some((1.0, 2.0)));
    assert_eq!(parse_timing_line("00:00:01.000 -> 00:00:02.000"), None);
}

/// Test that cue Display and the SRT serializer agree
#[test]
fn test_cueDisplay_shouldMatchSrtSerialization() {
    let cue = Cue::new(1, 0.5, 2.25, "Добар дан");

    assert_eq!(cue.to_string(), codec::serialize(&[cue.clone()], SubtitleFormat::Srt));
}

/// Test that serialization renumbers from one in list order
#[test]
fn test_serialize_withStaleSequence_shouldNumberFromOne() {
    let cues = vec![Cue::new(5, 0.0, 1.0, "a"), Cue::new(9, 1.5, 2.5, "b")];

    let srt = codec::serialize(&cues, SubtitleFormat::Srt);

    assert!(srt.starts_with("1\n"));
    assert!(srt.contains("\n\n2\n"));
}

/// Test that blank lines inside cue text cannot split a block
#[test]
fn test_serialize_withBlankLineInText_shouldDropIt() {
    let cues = vec![Cue::new(1, 0.0, 1.0, "prvi\n\ndrugi")];

    let parsed = codec::parse(&codec::serialize(&cues, SubtitleFormat::Srt), SubtitleFormat::Srt);

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].text, "prvi\ndrugi");
}

/// Test a round trip of Cyrillic multi-line cues in WebVTT
#[test]
fn test_roundTrip_vttWithCyrillic_shouldPreserveCues() {
    let cues = vec![
        Cue::new(1, 0.0, 1.5, "Ћирилица\nу два реда"),
        Cue::new(2, 1.6, 3.0, "Љубав"),
    ];

    let parsed = codec::parse(&codec::serialize(&cues, SubtitleFormat::WebVtt), SubtitleFormat::WebVtt);

    assert_eq!(parsed, cues);
}

/// Test that blocks with end before start are skipped
#[test]
fn test_parse_withInvertedTiming_shouldSkipBlock() {
    let content = "1\n00:00:05,000 --> 00:00:04,000\nObrnuto\n\n2\n00:00:06,000 --> 00:00:07,000\nDobro\n";

    let cues = codec::parse(content, SubtitleFormat::Srt);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Dobro");
    assert_eq!(cues[0].sequence, 1);
}

/// Test that an hour field too large for milliseconds skips only its block
#[test]
fn test_parse_withOverflowingHours_shouldSkipBlockAndKeepNext() {
    let content = "1\n99999999999999:00:00,000 --> 99999999999999:00:01,000\nLoše\n\n2\n00:00:01,000 --> 00:00:02,000\nDobro\n";

    let cues = codec::parse(content, SubtitleFormat::Srt);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "Dobro");
    assert_eq!(parse_timecode("99999999999999:00:00,000"), None);
}

/// Test parsing of old Mac-style bare carriage return line endings
#[test]
fn test_parse_withBareCarriageReturns_shouldSplitLines() {
    let content = "1\r00:00:00,000 --> 00:00:01,000\rprvi\rred\r\r2\r00:00:02,000 --> 00:00:03,000\rdrugi\r";

    let cues = codec::parse(content, SubtitleFormat::Srt);

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].text, "prvi\nred");
    assert_eq!(cues[1], Cue::new(2, 2.0, 3.0, "drugi"));
}

/// Test that cues without visible text are left out and numbering stays contiguous
#[test]
fn test_serialize_withEmptyCue_shouldLeaveItOutAndRenumber() {
    let cues = vec![
        Cue::new(1, 0.0, 1.0, "prvi"),
        Cue::new(2, 1.5, 2.0, " \n "),
        Cue::new(3, 2.5, 3.0, "treći"),
    ];

    let srt = codec::serialize(&cues, SubtitleFormat::Srt);
    let parsed = codec::parse(&srt, SubtitleFormat::Srt);

    assert!(srt.contains("\n\n2\n00:00:02,500"));
    assert!(!srt.contains("\n3\n"));
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].text, "treći");
}

/// Test format names and extensions
#[test]
fn test_subtitleFormat_fromStr_shouldAcceptAliases() {
    assert_eq!("subrip".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Srt);
    assert_eq!("WebVTT".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::WebVtt);
    assert_eq!(SubtitleFormat::WebVtt.extension(), "vtt");
    assert_eq!(SubtitleFormat::Srt.to_string(), "srt");
}
